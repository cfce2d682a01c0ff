use crate::aggregate_id;
use crate::domain::a001_user::aggregate::UserId;
use crate::domain::a002_guinea_pig::aggregate::GuineaPigId;
use crate::domain::a003_food_type::aggregate::FoodTypeId;
use crate::domain::common::validation::check_length;
use crate::domain::common::{AggregateId, AggregateRoot, ValidationErrors};
use crate::shared::form_fields::FormFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique food entry identifier
    FoodEntryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

pub const NOTES_MAX: usize = 512;

/// One feeding, shared by any number of guinea pigs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: FoodEntryId,
    pub food_type_id: FoodTypeId,
    pub notes: Option<String>,
    pub guinea_pig_ids: Vec<GuineaPigId>,
    pub user_id: Option<UserId>,
    pub utc_date: DateTime<Utc>,
}

impl FoodEntry {
    /// Apply an edit; the editing user becomes the entry's user
    pub fn update(&mut self, dto: &FoodEntryDto, user_id: UserId) {
        if let Some(food_type_id) = dto.food_type_id {
            self.food_type_id = food_type_id;
        }
        self.notes = dto.notes_value();
        self.guinea_pig_ids = dto.guinea_pig_ids.clone();
        self.user_id = Some(user_id);
    }
}

impl AggregateRoot for FoodEntry {
    type Id = FoodEntryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "food_entry"
    }

    fn element_name() -> &'static str {
        "food entry"
    }

    fn list_name() -> &'static str {
        "food entries"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Modal form payload for creating/updating a food entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntryDto {
    pub food_type_id: Option<FoodTypeId>,
    pub notes: String,
    pub guinea_pig_ids: Vec<GuineaPigId>,
}

impl FoodEntryDto {
    /// Unparseable ids are dropped; a missing food type fails validation
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            food_type_id: fields
                .get("food_type_id")
                .and_then(|v| FoodTypeId::from_string(v).ok()),
            notes: fields.get("notes").unwrap_or_default().to_string(),
            guinea_pig_ids: fields
                .get_all("guinea_pig_ids")
                .into_iter()
                .filter_map(|v| GuineaPigId::from_string(v).ok())
                .collect(),
        }
    }

    pub fn notes_value(&self) -> Option<String> {
        let trimmed = self.notes.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.food_type_id.is_none() {
            errors.add("food_type_id", "Not a valid choice.");
        }
        check_length(&mut errors, "notes", &self.notes, NOTES_MAX);
        errors.into_result()
    }

    /// Selected values must be among the offered choices
    pub fn validate_choices(
        &self,
        food_types: &[FoodTypeId],
        guinea_pigs: &[GuineaPigId],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(id) = self.food_type_id {
            if !food_types.contains(&id) {
                errors.add("food_type_id", "Not a valid choice.");
            }
        }
        let invalid: Vec<String> = self
            .guinea_pig_ids
            .iter()
            .filter(|id| !guinea_pigs.contains(id))
            .map(|id| id.to_string())
            .collect();
        if !invalid.is_empty() {
            errors.add(
                "guinea_pig_ids",
                format!("'{}' are not valid choices for this field.", invalid.join(", ")),
            );
        }
        errors.into_result()
    }
}

impl From<&FoodEntry> for FoodEntryDto {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            food_type_id: Some(entry.food_type_id),
            notes: entry.notes.clone().unwrap_or_default(),
            guinea_pig_ids: entry.guinea_pig_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_reads_multi_select() {
        let fields =
            FormFields::parse("food_type_id=2&guinea_pig_ids=1&guinea_pig_ids=x&guinea_pig_ids=4&notes=+");
        let dto = FoodEntryDto::from_fields(&fields);
        assert_eq!(dto.food_type_id, Some(FoodTypeId(2)));
        assert_eq!(dto.guinea_pig_ids, vec![GuineaPigId(1), GuineaPigId(4)]);
        assert_eq!(dto.notes_value(), None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_missing_food_type() {
        let dto = FoodEntryDto::from_fields(&FormFields::parse("food_type_id=abc"));
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.for_field("food_type_id"), ["Not a valid choice."]);
    }

    #[test]
    fn test_choices_are_checked() {
        let dto = FoodEntryDto {
            food_type_id: Some(FoodTypeId(9)),
            notes: String::new(),
            guinea_pig_ids: vec![GuineaPigId(1), GuineaPigId(7)],
        };
        let errors = dto
            .validate_choices(&[FoodTypeId(1)], &[GuineaPigId(1), GuineaPigId(2)])
            .unwrap_err();
        assert!(errors.has("food_type_id"));
        assert_eq!(
            errors.for_field("guinea_pig_ids"),
            ["'7' are not valid choices for this field."]
        );
        assert!(dto
            .validate_choices(&[FoodTypeId(9)], &[GuineaPigId(1), GuineaPigId(7)])
            .is_ok());
    }

    #[test]
    fn test_update_sets_editor() {
        let mut entry = FoodEntry {
            id: FoodEntryId(5),
            food_type_id: FoodTypeId(1),
            notes: Some("old".into()),
            guinea_pig_ids: vec![GuineaPigId(1)],
            user_id: Some(UserId(1)),
            utc_date: Utc::now(),
        };
        let dto = FoodEntryDto {
            food_type_id: Some(FoodTypeId(2)),
            notes: " fresh ".into(),
            guinea_pig_ids: vec![GuineaPigId(2), GuineaPigId(3)],
        };
        entry.update(&dto, UserId(2));
        assert_eq!(entry.food_type_id, FoodTypeId(2));
        assert_eq!(entry.notes.as_deref(), Some("fresh"));
        assert_eq!(entry.guinea_pig_ids.len(), 2);
        assert_eq!(entry.user_id, Some(UserId(2)));
    }
}
