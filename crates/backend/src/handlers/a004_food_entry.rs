use axum::{extract::Path, response::Html, Json};
use contracts::domain::a004_food_entry::aggregate::FoodEntryId;
use contracts::shared::form_fields::FormFields;
use contracts::shared::modal_form::FormStatus;

use crate::domain::a004_food_entry::service;
use crate::shared::error::{AppError, AppResult};
use crate::shared::modal_form::FormReply;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/food_entry/add
pub async fn add_form(_user: CurrentUser) -> AppResult<Html<String>> {
    Ok(Html(service::new_form().await?))
}

/// POST /api/food_entry/add
pub async fn add_submit(user: CurrentUser, body: String) -> AppResult<FormReply> {
    Ok(service::submit(None, &FormFields::parse(&body), user.id()).await?)
}

/// GET /api/food_entry/edit/:id
pub async fn edit_form(_user: CurrentUser, Path(id): Path<i64>) -> AppResult<Html<String>> {
    let entry = service::get_by_id(FoodEntryId(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(service::edit_form(&entry).await?))
}

/// POST /api/food_entry/edit/:id
pub async fn edit_submit(
    user: CurrentUser,
    Path(id): Path<i64>,
    body: String,
) -> AppResult<FormReply> {
    let entry = service::get_by_id(FoodEntryId(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(service::submit(Some(entry), &FormFields::parse(&body), user.id()).await?)
}

/// POST /api/food_entry/delete
///
/// Replies ok whether or not something was deleted.
pub async fn delete(_user: CurrentUser, body: String) -> AppResult<Json<FormStatus>> {
    service::delete_by_form(&FormFields::parse(&body)).await?;
    Ok(Json(FormStatus::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::UserId;

    use crate::shared::data::db::testing;

    fn user() -> CurrentUser {
        CurrentUser::for_tests(UserId(1))
    }

    #[tokio::test]
    async fn test_edit_of_missing_id_is_not_found() {
        let _db = testing::database().await;
        assert!(matches!(
            edit_form(user(), Path(987_654)).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            edit_submit(user(), Path(987_654), "food_type_id=1".to_string()).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_replies_ok_without_a_match() {
        let _db = testing::database().await;
        for body in ["id=abc", "id=987654", ""] {
            let Json(status) = delete(user(), body.to_string()).await.unwrap();
            assert!(status.is_ok(), "body {:?}", body);
        }
    }
}
