use chrono::{DateTime, Utc};
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a002_guinea_pig::aggregate::GuineaPigId;
use contracts::domain::a005_weight_entry::aggregate::{WeightEntry, WeightEntryId};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weight_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub value: f64,
    pub guinea_pig_id: i64,
    pub user_id: Option<i64>,
    pub utc_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WeightEntry {
    fn from(m: Model) -> Self {
        WeightEntry {
            id: WeightEntryId(m.id),
            value: m.value,
            guinea_pig_id: GuineaPigId(m.guinea_pig_id),
            user_id: m.user_id.map(UserId),
            utc_date: m.utc_date,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Entries with `start <= utc_date < end`, oldest first; empty without bounds
pub async fn list_in_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> anyhow::Result<Vec<WeightEntry>> {
    if start.is_none() && end.is_none() {
        return Ok(Vec::new());
    }
    let mut query = Entity::find();
    if let Some(start) = start {
        query = query.filter(Column::UtcDate.gte(start));
    }
    if let Some(end) = end {
        query = query.filter(Column::UtcDate.lt(end));
    }
    let items = query
        .order_by_asc(Column::UtcDate)
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_all() -> anyhow::Result<Vec<WeightEntry>> {
    let items = Entity::find()
        .order_by_asc(Column::UtcDate)
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: WeightEntryId) -> anyhow::Result<Option<WeightEntry>> {
    let result = Entity::find_by_id(id.0).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &WeightEntry) -> anyhow::Result<WeightEntryId> {
    let active = ActiveModel {
        value: Set(aggregate.value),
        guinea_pig_id: Set(aggregate.guinea_pig_id.0),
        user_id: Set(aggregate.user_id.map(|u| u.0)),
        utc_date: Set(aggregate.utc_date),
        ..Default::default()
    };
    let result = Entity::insert(active).exec(conn()).await?;
    Ok(WeightEntryId(result.last_insert_id))
}

pub async fn update(aggregate: &WeightEntry) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.0),
        value: Set(aggregate.value),
        guinea_pig_id: Set(aggregate.guinea_pig_id.0),
        user_id: Set(aggregate.user_id.map(|u| u.0)),
        utc_date: Set(aggregate.utc_date),
    };
    active.update(conn()).await?;
    Ok(())
}
