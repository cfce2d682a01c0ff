use crate::aggregate_id;
use crate::domain::common::validation::{check_length, check_text};
use crate::domain::common::{AggregateRoot, ValidationErrors};
use crate::shared::form_fields::FormFields;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique food type identifier
    FoodTypeId
);

// ============================================================================
// Aggregate Root
// ============================================================================

pub const LABEL_MAX: usize = 64;
pub const RECOMMENDATIONS_MAX: usize = 512;

/// Kind of food served, with feeding recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodType {
    pub id: FoodTypeId,
    pub label: String,
    pub recommendations: Option<String>,
    /// Counted by the food statistics
    pub in_statistics: bool,
    /// Hidden from the food entry form and from statistics
    pub is_hidden: bool,
}

impl FoodType {
    pub fn update(&mut self, dto: &FoodTypeDto) {
        self.label = dto.label.trim().to_string();
        self.recommendations = dto.recommendations_value();
        self.in_statistics = dto.in_statistics;
        self.is_hidden = dto.is_hidden;
    }

    /// Whether the type takes part in food statistics
    pub fn is_counted(&self) -> bool {
        self.in_statistics && !self.is_hidden
    }
}

impl AggregateRoot for FoodType {
    type Id = FoodTypeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "food_type"
    }

    fn element_name() -> &'static str {
        "food type"
    }

    fn list_name() -> &'static str {
        "food types"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Modal form payload for creating/updating a food type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodTypeDto {
    pub label: String,
    pub recommendations: String,
    pub in_statistics: bool,
    pub is_hidden: bool,
}

impl Default for FoodTypeDto {
    fn default() -> Self {
        Self {
            label: String::new(),
            recommendations: String::new(),
            in_statistics: true,
            is_hidden: false,
        }
    }
}

impl FoodTypeDto {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            label: fields.get("label").unwrap_or_default().to_string(),
            recommendations: fields.get("recommendations").unwrap_or_default().to_string(),
            in_statistics: fields.is_checked("in_statistics"),
            is_hidden: fields.is_checked("is_hidden"),
        }
    }

    pub fn recommendations_value(&self) -> Option<String> {
        let trimmed = self.recommendations.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "label", &self.label, LABEL_MAX);
        check_length(&mut errors, "recommendations", &self.recommendations, RECOMMENDATIONS_MAX);
        errors.into_result()
    }
}

impl From<&FoodType> for FoodTypeDto {
    fn from(food_type: &FoodType) -> Self {
        Self {
            label: food_type.label.clone(),
            recommendations: food_type.recommendations.clone().unwrap_or_default(),
            in_statistics: food_type.in_statistics,
            is_hidden: food_type.is_hidden,
        }
    }
}
