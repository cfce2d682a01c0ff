use crate::aggregate_id;
use crate::domain::a001_user::aggregate::UserId;
use crate::domain::a002_guinea_pig::aggregate::GuineaPigId;
use crate::domain::common::{AggregateId, AggregateRoot, ValidationErrors};
use crate::shared::form_fields::FormFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique weight entry identifier
    WeightEntryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// A weighing of a single guinea pig, in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: WeightEntryId,
    pub value: f64,
    pub guinea_pig_id: GuineaPigId,
    pub user_id: Option<UserId>,
    pub utc_date: DateTime<Utc>,
}

impl WeightEntry {
    /// Apply a validated edit; the editing user becomes the entry's user
    pub fn update(&mut self, dto: &WeightEntryDto, user_id: UserId) {
        if let Some(value) = dto.parsed_value() {
            self.value = value;
        }
        if let Some(guinea_pig_id) = dto.guinea_pig_id {
            self.guinea_pig_id = guinea_pig_id;
        }
        self.user_id = Some(user_id);
    }
}

impl AggregateRoot for WeightEntry {
    type Id = WeightEntryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "weight_entry"
    }

    fn element_name() -> &'static str {
        "weight entry"
    }

    fn list_name() -> &'static str {
        "weight entries"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Modal form payload for creating/updating a weight entry
///
/// `value` keeps the raw text so an invalid submission re-renders as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightEntryDto {
    pub value: String,
    pub guinea_pig_id: Option<GuineaPigId>,
}

impl WeightEntryDto {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            value: fields.get("value").unwrap_or_default().trim().to_string(),
            guinea_pig_id: fields
                .get("guinea_pig_id")
                .and_then(|v| GuineaPigId::from_string(v).ok()),
        }
    }

    /// Parsed weight, `None` when not a positive number
    pub fn parsed_value(&self) -> Option<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let raw = self.value.trim();
        if raw.is_empty() {
            errors.add("value", "This field is required.");
        } else {
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => {}
                Ok(_) => errors.add("value", "Number must be greater than 0."),
                Err(_) => errors.add("value", "Not a valid float value."),
            }
        }
        if self.guinea_pig_id.is_none() {
            errors.add("guinea_pig_id", "Not a valid choice.");
        }
        errors.into_result()
    }

    pub fn validate_choices(&self, guinea_pigs: &[GuineaPigId]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(id) = self.guinea_pig_id {
            if !guinea_pigs.contains(&id) {
                errors.add("guinea_pig_id", "Not a valid choice.");
            }
        }
        errors.into_result()
    }
}

impl From<&WeightEntry> for WeightEntryDto {
    fn from(entry: &WeightEntry) -> Self {
        Self {
            value: entry.value.to_string(),
            guinea_pig_id: Some(entry.guinea_pig_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(body: &str) -> WeightEntryDto {
        WeightEntryDto::from_fields(&FormFields::parse(body))
    }

    #[test]
    fn test_valid_weight() {
        let d = dto("value=1012.5&guinea_pig_id=2");
        assert!(d.validate().is_ok());
        assert_eq!(d.parsed_value(), Some(1012.5));
        assert_eq!(d.guinea_pig_id, Some(GuineaPigId(2)));
    }

    #[test]
    fn test_invalid_weights() {
        assert_eq!(
            dto("value=&guinea_pig_id=1").validate().unwrap_err().for_field("value"),
            ["This field is required."]
        );
        assert_eq!(
            dto("value=heavy&guinea_pig_id=1").validate().unwrap_err().for_field("value"),
            ["Not a valid float value."]
        );
        assert_eq!(
            dto("value=0&guinea_pig_id=1").validate().unwrap_err().for_field("value"),
            ["Number must be greater than 0."]
        );
        assert!(dto("value=900").validate().unwrap_err().has("guinea_pig_id"));
    }

    #[test]
    fn test_raw_value_is_kept() {
        assert_eq!(dto("value=+heavy+").value, "heavy");
        assert_eq!(dto("value=heavy").parsed_value(), None);
    }

    #[test]
    fn test_unknown_guinea_pig() {
        let d = dto("value=900&guinea_pig_id=5");
        assert!(d.validate_choices(&[GuineaPigId(1)]).is_err());
        assert!(d.validate_choices(&[GuineaPigId(5)]).is_ok());
    }
}
