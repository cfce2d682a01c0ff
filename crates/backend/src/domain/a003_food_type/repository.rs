use contracts::domain::a003_food_type::aggregate::{FoodType, FoodTypeDto, FoodTypeId};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "food_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub label: String,
    pub recommendations: Option<String>,
    pub in_statistics: bool,
    pub is_hidden: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FoodType {
    fn from(m: Model) -> Self {
        FoodType {
            id: FoodTypeId(m.id),
            label: m.label,
            recommendations: m.recommendations,
            in_statistics: m.in_statistics,
            is_hidden: m.is_hidden,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All food types ordered by label, hidden ones included
pub async fn list_all() -> anyhow::Result<Vec<FoodType>> {
    let items = Entity::find()
        .order_by_asc(Column::Label)
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Food types offered by the food entry form
pub async fn list_visible() -> anyhow::Result<Vec<FoodType>> {
    let items = Entity::find()
        .filter(Column::IsHidden.eq(false))
        .order_by_asc(Column::Label)
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: FoodTypeId) -> anyhow::Result<Option<FoodType>> {
    let result = Entity::find_by_id(id.0).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &FoodTypeDto) -> anyhow::Result<FoodTypeId> {
    let active = ActiveModel {
        label: Set(dto.label.trim().to_string()),
        recommendations: Set(dto.recommendations_value()),
        in_statistics: Set(dto.in_statistics),
        is_hidden: Set(dto.is_hidden),
        ..Default::default()
    };
    let result = Entity::insert(active).exec(conn()).await?;
    Ok(FoodTypeId(result.last_insert_id))
}

pub async fn update(aggregate: &FoodType) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.0),
        label: Set(aggregate.label.clone()),
        recommendations: Set(aggregate.recommendations.clone()),
        in_statistics: Set(aggregate.in_statistics),
        is_hidden: Set(aggregate.is_hidden),
    };
    active.update(conn()).await?;
    Ok(())
}
