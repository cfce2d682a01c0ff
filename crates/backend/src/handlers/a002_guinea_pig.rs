use axum::{extract::Path, response::Html, Json};
use contracts::domain::a002_guinea_pig::aggregate::{GuineaPig, GuineaPigId};
use contracts::shared::form_fields::FormFields;

use crate::domain::a002_guinea_pig::service;
use crate::shared::error::{AppError, AppResult};
use crate::shared::modal_form::FormReply;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/guinea_pig
pub async fn list_all(_user: CurrentUser) -> AppResult<Json<Vec<GuineaPig>>> {
    Ok(Json(service::list_all().await?))
}

/// GET /api/guinea_pig/add
pub async fn add_form(_user: CurrentUser) -> Html<String> {
    Html(service::new_form())
}

/// POST /api/guinea_pig/add
pub async fn add_submit(_user: CurrentUser, body: String) -> AppResult<FormReply> {
    Ok(service::submit(None, &FormFields::parse(&body)).await?)
}

/// GET /api/guinea_pig/edit/:id
pub async fn edit_form(_user: CurrentUser, Path(id): Path<i64>) -> AppResult<Html<String>> {
    let pig = service::get_by_id(GuineaPigId(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(service::edit_form(&pig)))
}

/// POST /api/guinea_pig/edit/:id
pub async fn edit_submit(
    _user: CurrentUser,
    Path(id): Path<i64>,
    body: String,
) -> AppResult<FormReply> {
    let pig = service::get_by_id(GuineaPigId(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(service::submit(Some(pig), &FormFields::parse(&body)).await?)
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
            edit_submit(user(), Path(987_654), "name=Pepper".to_string()).await,
            Err(AppError::NotFound)
        ));
    }
}
