use axum::Json;
use chrono::Utc;
use contracts::dashboards::d400_daily_summary::dto::{DailySummaryResponse, VitaminCToggleResponse};

use crate::dashboards::d400_daily_summary::service;
use crate::shared::config;
use crate::shared::error::AppResult;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/dashboard
pub async fn get_summary(_user: CurrentUser) -> AppResult<Json<DailySummaryResponse>> {
    let tz = config::current().app.tz();
    Ok(Json(service::get_summary(tz, Utc::now()).await?))
}

/// POST /api/vitamin_c/toggle
pub async fn toggle_vitamin_c(user: CurrentUser) -> AppResult<Json<VitaminCToggleResponse>> {
    let tz = config::current().app.tz();
    Ok(Json(service::toggle_vitamin_c(tz, Utc::now(), user.id()).await?))
}
