use crate::aggregate_id;
use crate::domain::common::validation::check_text;
use crate::domain::common::{AggregateRoot, ValidationErrors};
use crate::shared::form_fields::FormFields;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique guinea pig identifier
    GuineaPigId
);

// ============================================================================
// Aggregate Root
// ============================================================================

pub const NAME_MAX: usize = 64;

/// A guinea pig whose food and weight are tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuineaPig {
    pub id: GuineaPigId,
    pub name: String,
}

impl GuineaPig {
    pub fn update(&mut self, dto: &GuineaPigDto) {
        self.name = dto.name.trim().to_string();
    }
}

impl AggregateRoot for GuineaPig {
    type Id = GuineaPigId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "guinea_pig"
    }

    fn element_name() -> &'static str {
        "guinea pig"
    }

    fn list_name() -> &'static str {
        "guinea pigs"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Modal form payload for creating/updating a guinea pig
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuineaPigDto {
    pub name: String,
}

impl GuineaPigDto {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.get("name").unwrap_or_default().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", &self.name, NAME_MAX);
        errors.into_result()
    }
}

impl From<&GuineaPig> for GuineaPigDto {
    fn from(pig: &GuineaPig) -> Self {
        Self {
            name: pig.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let dto = GuineaPigDto::from_fields(&FormFields::parse("name=+++"));
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.for_field("name"), ["This field is required."]);
    }

    #[test]
    fn test_update_trims_name() {
        let mut pig = GuineaPig {
            id: GuineaPigId(3),
            name: "Old".into(),
        };
        let dto = GuineaPigDto::from_fields(&FormFields::parse("name=+Peanut+"));
        assert!(dto.validate().is_ok());
        pig.update(&dto);
        assert_eq!(pig.name, "Peanut");
    }

    #[test]
    fn test_edit_url() {
        assert_eq!(GuineaPig::edit_url(GuineaPigId(3)), "/api/guinea_pig/edit/3");
        assert_eq!(GuineaPig::add_url(), "/api/guinea_pig/add");
    }
}
