use contracts::domain::a002_guinea_pig::aggregate::{GuineaPig, GuineaPigDto, GuineaPigId};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guinea_pig")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GuineaPig {
    fn from(m: Model) -> Self {
        GuineaPig {
            id: GuineaPigId(m.id),
            name: m.name,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All guinea pigs ordered by name
pub async fn list_all() -> anyhow::Result<Vec<GuineaPig>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: GuineaPigId) -> anyhow::Result<Option<GuineaPig>> {
    let result = Entity::find_by_id(id.0).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(dto: &GuineaPigDto) -> anyhow::Result<GuineaPigId> {
    let active = ActiveModel {
        name: Set(dto.name.trim().to_string()),
        ..Default::default()
    };
    let result = Entity::insert(active).exec(conn()).await?;
    Ok(GuineaPigId(result.last_insert_id))
}

pub async fn update(aggregate: &GuineaPig) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.0),
        name: Set(aggregate.name.clone()),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn names_by_id() -> anyhow::Result<HashMap<GuineaPigId, String>> {
    Ok(list_all()
        .await?
        .into_iter()
        .map(|pig| (pig.id, pig.name))
        .collect())
}
