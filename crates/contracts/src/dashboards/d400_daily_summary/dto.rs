use crate::domain::a004_food_entry::aggregate::FoodEntryId;
use crate::domain::a006_vitamin_c_entry::aggregate::VitaminCEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard of the current local day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    /// Today's feedings, oldest first
    pub food_entries: Vec<FoodEntryRow>,
    /// Today's vitamin C entry, if given
    pub vitamin_c: Option<VitaminCState>,
}

/// Food entry with its references resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntryRow {
    pub id: FoodEntryId,
    pub utc_date: DateTime<Utc>,
    pub food_label: String,
    pub guinea_pigs: Vec<String>,
    pub user_name: Option<String>,
    pub notes: Option<String>,
    /// Modal form URL for editing the entry
    pub edit_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitaminCState {
    pub id: VitaminCEntryId,
    pub utc_date: DateTime<Utc>,
    pub user_name: Option<String>,
}

/// Reply of the vitamin C toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitaminCToggleResponse {
    /// Whether today's entry exists after the toggle
    pub given: bool,
    pub vitamin_c: Option<VitaminCState>,
}
