use contracts::dashboards::d400_daily_summary::dto::{DailySummaryResponse, VitaminCToggleResponse};
use contracts::domain::a004_food_entry::aggregate::FoodEntryId;
use contracts::shared::form_fields::FormFields;
use contracts::shared::modal_form::FormStatus;

use crate::shared::api_utils::{get_json, post_empty, post_form};

pub async fn fetch_summary() -> Result<DailySummaryResponse, String> {
    get_json("/api/dashboard").await
}

pub async fn toggle_vitamin_c() -> Result<VitaminCToggleResponse, String> {
    post_empty("/api/vitamin_c/toggle").await
}

pub async fn delete_food_entry(id: FoodEntryId) -> Result<(), String> {
    let body = FormFields::new().with("id", id.to_string()).encode();
    let status: FormStatus = post_form("/api/food_entry/delete", body).await?;
    if status.is_ok() {
        Ok(())
    } else {
        Err(format!("Delete failed: {}", status.status))
    }
}
