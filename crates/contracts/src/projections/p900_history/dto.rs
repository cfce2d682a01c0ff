use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date range of the history page, both ends inclusive, local dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    Food,
    Weight,
    VitaminC,
}

impl HistoryKind {
    pub fn icon(&self) -> &'static str {
        match self {
            HistoryKind::Food => "🍽️",
            HistoryKind::Weight => "⚖️",
            HistoryKind::VitaminC => "🌻",
        }
    }
}

/// One line of the merged history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub utc_date: DateTime<Utc>,
    pub kind: HistoryKind,
    /// Food label or weight value, empty for vitamin C
    pub detail: String,
    /// Comma separated guinea pig names
    pub guinea_pigs: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Effective range after defaults were applied
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub entries: Vec<HistoryRow>,
}
