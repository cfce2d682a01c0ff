use chrono::{DateTime, Utc};
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a002_guinea_pig::aggregate::GuineaPigId;
use contracts::domain::a003_food_type::aggregate::FoodTypeId;
use contracts::domain::a004_food_entry::aggregate::{FoodEntry, FoodEntryId};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

pub mod entry {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "food_entry")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub food_type_id: i64,
        pub notes: Option<String>,
        pub user_id: Option<i64>,
        pub utc_date: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Guinea pigs fed by a food entry
pub mod link {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "food_entries")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub food_entry_id: i64,
        #[sea_orm(primary_key, auto_increment = false)]
        pub guinea_pig_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_aggregate(m: entry::Model, guinea_pig_ids: Vec<GuineaPigId>) -> FoodEntry {
    FoodEntry {
        id: FoodEntryId(m.id),
        food_type_id: FoodTypeId(m.food_type_id),
        notes: m.notes,
        guinea_pig_ids,
        user_id: m.user_id.map(UserId),
        utc_date: m.utc_date,
    }
}

async fn load_links(entry_ids: &[i64]) -> anyhow::Result<HashMap<i64, Vec<GuineaPigId>>> {
    let mut links: HashMap<i64, Vec<GuineaPigId>> = HashMap::new();
    if entry_ids.is_empty() {
        return Ok(links);
    }
    let rows = link::Entity::find()
        .filter(link::Column::FoodEntryId.is_in(entry_ids.iter().copied()))
        .order_by_asc(link::Column::GuineaPigId)
        .all(conn())
        .await?;
    for row in rows {
        links
            .entry(row.food_entry_id)
            .or_default()
            .push(GuineaPigId(row.guinea_pig_id));
    }
    Ok(links)
}

async fn with_links(models: Vec<entry::Model>) -> anyhow::Result<Vec<FoodEntry>> {
    let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
    let mut links = load_links(&ids).await?;
    Ok(models
        .into_iter()
        .map(|m| {
            let pigs = links.remove(&m.id).unwrap_or_default();
            to_aggregate(m, pigs)
        })
        .collect())
}

/// Entries with `start <= utc_date < end`, oldest first
///
/// Without either bound nothing is returned.
pub async fn list_in_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> anyhow::Result<Vec<FoodEntry>> {
    if start.is_none() && end.is_none() {
        return Ok(Vec::new());
    }
    let mut query = entry::Entity::find();
    if let Some(start) = start {
        query = query.filter(entry::Column::UtcDate.gte(start));
    }
    if let Some(end) = end {
        query = query.filter(entry::Column::UtcDate.lt(end));
    }
    let models = query
        .order_by_asc(entry::Column::UtcDate)
        .order_by_asc(entry::Column::Id)
        .all(conn())
        .await?;
    with_links(models).await
}

/// Every entry without guinea pigs, for statistics
pub async fn list_all_bare() -> anyhow::Result<Vec<FoodEntry>> {
    let models = entry::Entity::find()
        .order_by_asc(entry::Column::UtcDate)
        .all(conn())
        .await?;
    Ok(models
        .into_iter()
        .map(|m| to_aggregate(m, Vec::new()))
        .collect())
}

pub async fn get_by_id(id: FoodEntryId) -> anyhow::Result<Option<FoodEntry>> {
    let Some(model) = entry::Entity::find_by_id(id.0).one(conn()).await? else {
        return Ok(None);
    };
    Ok(with_links(vec![model]).await?.pop())
}

fn link_models(entry_id: i64, guinea_pig_ids: &[GuineaPigId]) -> Vec<link::ActiveModel> {
    let mut ids: Vec<i64> = guinea_pig_ids.iter().map(|id| id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.into_iter()
        .map(|guinea_pig_id| link::ActiveModel {
            food_entry_id: Set(entry_id),
            guinea_pig_id: Set(guinea_pig_id),
        })
        .collect()
}

/// Insert the entry row and its guinea pig links in one transaction
pub async fn insert(aggregate: &FoodEntry) -> anyhow::Result<FoodEntryId> {
    let txn = conn().begin().await?;
    let active = entry::ActiveModel {
        food_type_id: Set(aggregate.food_type_id.0),
        notes: Set(aggregate.notes.clone()),
        user_id: Set(aggregate.user_id.map(|u| u.0)),
        utc_date: Set(aggregate.utc_date),
        ..Default::default()
    };
    let result = entry::Entity::insert(active).exec(&txn).await?;
    let id = result.last_insert_id;
    let links = link_models(id, &aggregate.guinea_pig_ids);
    if !links.is_empty() {
        link::Entity::insert_many(links).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(FoodEntryId(id))
}

/// Update the entry row and replace its guinea pig links
pub async fn update(aggregate: &FoodEntry) -> anyhow::Result<()> {
    let txn = conn().begin().await?;
    let active = entry::ActiveModel {
        id: Set(aggregate.id.0),
        food_type_id: Set(aggregate.food_type_id.0),
        notes: Set(aggregate.notes.clone()),
        user_id: Set(aggregate.user_id.map(|u| u.0)),
        utc_date: Set(aggregate.utc_date),
    };
    entry::Entity::update(active).exec(&txn).await?;
    link::Entity::delete_many()
        .filter(link::Column::FoodEntryId.eq(aggregate.id.0))
        .exec(&txn)
        .await?;
    let links = link_models(aggregate.id.0, &aggregate.guinea_pig_ids);
    if !links.is_empty() {
        link::Entity::insert_many(links).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(())
}

/// Delete the entry and its links; `false` when it did not exist
pub async fn delete(id: FoodEntryId) -> anyhow::Result<bool> {
    let txn = conn().begin().await?;
    link::Entity::delete_many()
        .filter(link::Column::FoodEntryId.eq(id.0))
        .exec(&txn)
        .await?;
    let result = entry::Entity::delete_by_id(id.0).exec(&txn).await?;
    txn.commit().await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_models_dedup_guinea_pigs() {
        let links = link_models(7, &[GuineaPigId(3), GuineaPigId(1), GuineaPigId(3)]);
        let pigs: Vec<i64> = links
            .iter()
            .map(|l| match &l.guinea_pig_id {
                sea_orm::ActiveValue::Set(v) => *v,
                _ => 0,
            })
            .collect();
        assert_eq!(pigs, vec![1, 3]);
    }
}
