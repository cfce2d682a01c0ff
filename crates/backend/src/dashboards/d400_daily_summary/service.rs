use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use contracts::dashboards::d400_daily_summary::dto::{
    DailySummaryResponse, FoodEntryRow, VitaminCState, VitaminCToggleResponse,
};
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a002_guinea_pig::aggregate::GuineaPigId;
use contracts::domain::a003_food_type::aggregate::FoodTypeId;
use contracts::domain::a004_food_entry::aggregate::FoodEntry;
use contracts::domain::a006_vitamin_c_entry::aggregate::VitaminCEntry;
use contracts::domain::common::AggregateRoot;
use std::collections::HashMap;

use crate::domain::{a002_guinea_pig, a003_food_type, a004_food_entry, a006_vitamin_c_entry};
use crate::shared::time::beginning_of_day_utc;
use crate::system::users::repository as users;

/// Lookup tables for turning stored ids into display names
#[derive(Debug, Default)]
pub struct Names {
    pub food_types: HashMap<FoodTypeId, String>,
    pub guinea_pigs: HashMap<GuineaPigId, String>,
    pub users: HashMap<UserId, String>,
}

impl Names {
    pub async fn load() -> anyhow::Result<Self> {
        Ok(Self {
            food_types: a003_food_type::service::labels_by_id().await?,
            guinea_pigs: a002_guinea_pig::repository::names_by_id().await?,
            users: users::names_by_id().await?,
        })
    }

    pub fn user(&self, id: Option<UserId>) -> Option<String> {
        id.and_then(|id| self.users.get(&id).cloned())
    }

    /// Guinea pig names in alphabetical order; unknown ids are skipped
    pub fn guinea_pigs(&self, ids: &[GuineaPigId]) -> Vec<String> {
        let mut names: Vec<String> = ids
            .iter()
            .filter_map(|id| self.guinea_pigs.get(id).cloned())
            .collect();
        names.sort();
        names
    }
}

pub fn food_entry_row(entry: &FoodEntry, names: &Names) -> FoodEntryRow {
    FoodEntryRow {
        id: entry.id,
        utc_date: entry.utc_date,
        food_label: names
            .food_types
            .get(&entry.food_type_id)
            .cloned()
            .unwrap_or_default(),
        guinea_pigs: names.guinea_pigs(&entry.guinea_pig_ids),
        user_name: names.user(entry.user_id),
        notes: entry.notes.clone(),
        edit_url: FoodEntry::edit_url(entry.id),
    }
}

pub fn vitamin_c_state(entry: &VitaminCEntry, names: &Names) -> VitaminCState {
    VitaminCState {
        id: entry.id,
        utc_date: entry.utc_date,
        user_name: names.user(entry.user_id),
    }
}

/// Today's feedings and vitamin C state
pub async fn get_summary(tz: Tz, now: DateTime<Utc>) -> anyhow::Result<DailySummaryResponse> {
    let start = beginning_of_day_utc(tz, now);
    let entries = a004_food_entry::repository::list_in_range(Some(start), None).await?;
    let vitamin_c = a006_vitamin_c_entry::service::get_today(tz, now).await?;
    let names = Names::load().await?;

    Ok(DailySummaryResponse {
        food_entries: entries.iter().map(|e| food_entry_row(e, &names)).collect(),
        vitamin_c: vitamin_c.as_ref().map(|v| vitamin_c_state(v, &names)),
    })
}

pub async fn toggle_vitamin_c(
    tz: Tz,
    now: DateTime<Utc>,
    user_id: UserId,
) -> anyhow::Result<VitaminCToggleResponse> {
    let entry = a006_vitamin_c_entry::service::toggle(tz, now, user_id).await?;
    let names = Names::load().await?;
    Ok(VitaminCToggleResponse {
        given: entry.is_some(),
        vitamin_c: entry.as_ref().map(|v| vitamin_c_state(v, &names)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_food_entry::aggregate::FoodEntryId;

    fn names() -> Names {
        Names {
            food_types: HashMap::from([(FoodTypeId(1), "Hay".to_string())]),
            guinea_pigs: HashMap::from([
                (GuineaPigId(1), "Pumpkin".to_string()),
                (GuineaPigId(2), "Oreo".to_string()),
            ]),
            users: HashMap::from([(UserId(5), "anna".to_string())]),
        }
    }

    #[test]
    fn test_food_entry_row_resolves_names() {
        let entry = FoodEntry {
            id: FoodEntryId(9),
            food_type_id: FoodTypeId(1),
            notes: Some("half a cup".into()),
            guinea_pig_ids: vec![GuineaPigId(1), GuineaPigId(2), GuineaPigId(77)],
            user_id: Some(UserId(5)),
            utc_date: Utc::now(),
        };
        let row = food_entry_row(&entry, &names());
        assert_eq!(row.food_label, "Hay");
        assert_eq!(row.guinea_pigs, vec!["Oreo", "Pumpkin"]);
        assert_eq!(row.user_name.as_deref(), Some("anna"));
        assert_eq!(row.edit_url, "/api/food_entry/edit/9");
    }

    #[test]
    fn test_unknown_user_is_none() {
        assert_eq!(names().user(Some(UserId(99))), None);
        assert_eq!(names().user(None), None);
    }
}
