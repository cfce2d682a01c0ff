use anyhow::Result;
use contracts::domain::a001_user::aggregate::{User, UserId};

use super::repository;

/// Find the user for a login name, creating it on first login
///
/// Returns `None` for a blank name.
pub async fn find_or_create(raw_name: &str) -> Result<Option<User>> {
    let Some(name) = User::normalize_name(raw_name) else {
        return Ok(None);
    };

    if let Some(user) = repository::get_by_name(&name).await? {
        return Ok(Some(user));
    }

    let id = repository::create(&name).await?;
    tracing::info!("Created user '{}' ({})", name, id);
    Ok(Some(User { id, name }))
}

pub async fn get_by_id(id: UserId) -> Result<Option<User>> {
    repository::get_by_id(id).await
}
