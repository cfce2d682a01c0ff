use axum::Json;
use contracts::dashboards::d401_statistics::dto::StatisticsResponse;

use crate::dashboards::d401_statistics::service;
use crate::shared::error::AppResult;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/statistics
pub async fn get_statistics(_user: CurrentUser) -> AppResult<Json<StatisticsResponse>> {
    Ok(Json(service::get_statistics().await?))
}
