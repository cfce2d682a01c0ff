use chrono::{DateTime, Utc};
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a006_vitamin_c_entry::aggregate::{VitaminCEntry, VitaminCEntryId};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vitamin_c_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Option<i64>,
    pub utc_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for VitaminCEntry {
    fn from(m: Model) -> Self {
        VitaminCEntry {
            id: VitaminCEntryId(m.id),
            user_id: m.user_id.map(UserId),
            utc_date: m.utc_date,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// First entry at or after `start`
pub async fn first_since(start: DateTime<Utc>) -> anyhow::Result<Option<VitaminCEntry>> {
    let result = Entity::find()
        .filter(Column::UtcDate.gte(start))
        .order_by_asc(Column::UtcDate)
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Delete every entry at or after `start`, returning how many went
pub async fn delete_since(start: DateTime<Utc>) -> anyhow::Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::UtcDate.gte(start))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}

pub async fn insert(user_id: UserId, utc_date: DateTime<Utc>) -> anyhow::Result<VitaminCEntry> {
    let active = ActiveModel {
        user_id: Set(Some(user_id.0)),
        utc_date: Set(utc_date),
        ..Default::default()
    };
    let result = Entity::insert(active).exec(conn()).await?;
    Ok(VitaminCEntry {
        id: VitaminCEntryId(result.last_insert_id),
        user_id: Some(user_id),
        utc_date,
    })
}

/// Entries with `start <= utc_date < end`, oldest first; empty without bounds
pub async fn list_in_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> anyhow::Result<Vec<VitaminCEntry>> {
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
