use crate::aggregate_id;
use crate::domain::a001_user::aggregate::UserId;
use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

aggregate_id!(
    /// Unique vitamin C entry identifier
    VitaminCEntryId
);

/// Vitamin C was given today; only the user and the time are recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitaminCEntry {
    pub id: VitaminCEntryId,
    pub user_id: Option<UserId>,
    pub utc_date: DateTime<Utc>,
}

impl AggregateRoot for VitaminCEntry {
    type Id = VitaminCEntryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "vitamin_c_entry"
    }

    fn element_name() -> &'static str {
        "vitamin C entry"
    }

    fn list_name() -> &'static str {
        "vitamin C entries"
    }
}
