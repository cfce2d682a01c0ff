use axum::extract::Query;
use axum::Json;
use chrono::Utc;
use contracts::projections::p900_history::dto::{HistoryQuery, HistoryResponse};

use crate::projections::p900_history::service;
use crate::shared::config;
use crate::shared::error::AppResult;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/history?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn get_history(
    _user: CurrentUser,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryResponse>> {
    let tz = config::current().app.tz();
    Ok(Json(service::get_history(&query, tz, Utc::now()).await?))
}
