use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::error::{AppError, AppResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::{auth::jwt, users::service as user_service};

/// POST /api/system/auth/login
///
/// Name-only login: the first word of the name, lower-cased, identifies the
/// user. Unknown names register a new user.
pub async fn login(Json(request): Json<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    let user = user_service::find_or_create(&request.name)
        .await?
        .ok_or_else(|| AppError::BadRequest("name can't be blank".into()))?;

    let access_token = jwt::generate_access_token(user.id.0, &user.name).await?;
    tracing::info!("User '{}' logged in", user.name);

    Ok(Json(LoginResponse {
        access_token,
        user: UserInfo {
            id: user.id.0,
            name: user.name,
        },
    }))
}

/// GET /api/system/auth/me
pub async fn current_user(user: CurrentUser) -> Result<Json<UserInfo>, StatusCode> {
    let found = user_service::get_by_id(user.id())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(UserInfo {
        id: found.id.0,
        name: found.name,
    }))
}
