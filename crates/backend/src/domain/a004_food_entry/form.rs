use contracts::domain::a004_food_entry::aggregate::{FoodEntry, FoodEntryDto, NOTES_MAX};
use contracts::domain::common::{AggregateRoot, ValidationErrors};

use crate::shared::html::{self, Choice};

/// Choices offered by the food entry form
#[derive(Debug, Clone, Default)]
pub struct FoodEntryChoices {
    pub food_types: Vec<Choice>,
    pub guinea_pigs: Vec<Choice>,
}

pub fn render(
    dto: &FoodEntryDto,
    choices: &FoodEntryChoices,
    errors: &ValidationErrors,
    is_edit: bool,
) -> String {
    let title = format!(
        "{} {}",
        if is_edit { "Edit" } else { "New" },
        FoodEntry::element_name()
    );
    let selected_pigs: Vec<i64> = dto.guinea_pig_ids.iter().map(|id| id.0).collect();
    html::modal_form(
        &title,
        &[
            html::select(
                "food_type_id",
                "food type",
                &choices.food_types,
                dto.food_type_id.map(|id| id.0),
                errors.for_field("food_type_id"),
            ),
            html::checkbox_list(
                "guinea_pig_ids",
                "guinea pigs",
                &choices.guinea_pigs,
                &selected_pigs,
                errors.for_field("guinea_pig_ids"),
            ),
            html::textarea("notes", "notes", &dto.notes, NOTES_MAX, errors.for_field("notes")),
        ],
    )
}
