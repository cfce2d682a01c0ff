use anyhow::{Context, Result};
use contracts::domain::a001_user::aggregate::{User, UserId};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

fn from_row(row: &QueryResult) -> Result<User> {
    Ok(User {
        id: UserId(row.try_get("", "id")?),
        name: row.try_get("", "name")?,
    })
}

/// Get user by ID
pub async fn get_by_id(id: UserId) -> Result<Option<User>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            r#"SELECT id, name FROM "user" WHERE id = ?"#,
            [id.0.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

/// Get user by normalized name
pub async fn get_by_name(name: &str) -> Result<Option<User>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            r#"SELECT id, name FROM "user" WHERE name = ?"#,
            [name.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

/// Insert a user and return its ID
pub async fn create(name: &str) -> Result<UserId> {
    let result = get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            r#"INSERT INTO "user" (name) VALUES (?)"#,
            [name.into()],
        ))
        .await
        .context("Failed to insert user")?;
    Ok(UserId(result.last_insert_id() as i64))
}

/// Names of all users, keyed by ID
pub async fn names_by_id() -> Result<HashMap<UserId, String>> {
    let rows = get_connection()
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            r#"SELECT id, name FROM "user""#.to_string(),
        ))
        .await?;
    rows.iter()
        .map(|row| from_row(row).map(|u| (u.id, u.name)))
        .collect()
}
