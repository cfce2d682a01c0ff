use axum::{extract::Path, response::Html};
use contracts::domain::a005_weight_entry::aggregate::WeightEntryId;
use contracts::shared::form_fields::FormFields;

use crate::domain::a005_weight_entry::service;
use crate::shared::error::{AppError, AppResult};
use crate::shared::modal_form::FormReply;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/weight_entry/add
pub async fn add_form(_user: CurrentUser) -> AppResult<Html<String>> {
    Ok(Html(service::new_form().await?))
}

/// POST /api/weight_entry/add
pub async fn add_submit(user: CurrentUser, body: String) -> AppResult<FormReply> {
    Ok(service::submit(None, &FormFields::parse(&body), user.id()).await?)
}

/// GET /api/weight_entry/edit/:id
pub async fn edit_form(_user: CurrentUser, Path(id): Path<i64>) -> AppResult<Html<String>> {
    let entry = service::get_by_id(WeightEntryId(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(service::edit_form(&entry).await?))
}

/// POST /api/weight_entry/edit/:id
pub async fn edit_submit(
    user: CurrentUser,
    Path(id): Path<i64>,
    body: String,
) -> AppResult<FormReply> {
    let entry = service::get_by_id(WeightEntryId(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(service::submit(Some(entry), &FormFields::parse(&body), user.id()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::UserId;

    use crate::shared::data::db::testing;

    #[tokio::test]
    async fn test_edit_of_missing_id_is_not_found() {
        let _db = testing::database().await;
        let user = || CurrentUser::for_tests(UserId(1));
        assert!(matches!(
            edit_form(user(), Path(987_654)).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            edit_submit(user(), Path(987_654), "value=800".to_string()).await,
            Err(AppError::NotFound)
        ));
    }
}
