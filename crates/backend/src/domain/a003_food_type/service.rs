use super::{form, repository};
use contracts::domain::a003_food_type::aggregate::{FoodType, FoodTypeDto, FoodTypeId};
use contracts::domain::common::ValidationErrors;
use contracts::shared::form_fields::FormFields;
use std::collections::HashMap;

use crate::shared::html::Choice;
use crate::shared::modal_form::FormReply;

pub fn new_form() -> String {
    form::render(&FoodTypeDto::default(), &ValidationErrors::new(), false)
}

pub fn edit_form(food_type: &FoodType) -> String {
    form::render(&FoodTypeDto::from(food_type), &ValidationErrors::new(), true)
}

/// Validate a submission and store it, or re-render the form with errors
pub async fn submit(existing: Option<FoodType>, fields: &FormFields) -> anyhow::Result<FormReply> {
    let dto = FoodTypeDto::from_fields(fields);
    if let Err(errors) = dto.validate() {
        return Ok(FormReply::Invalid(form::render(&dto, &errors, existing.is_some())));
    }

    match existing {
        Some(mut food_type) => {
            food_type.update(&dto);
            repository::update(&food_type).await?;
            tracing::info!("Updated food type {} ({})", food_type.id, food_type.label);
        }
        None => {
            let id = repository::insert(&dto).await?;
            tracing::info!("Created food type {} ({})", id, dto.label.trim());
        }
    }
    Ok(FormReply::Saved)
}

pub async fn get_by_id(id: FoodTypeId) -> anyhow::Result<Option<FoodType>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<FoodType>> {
    repository::list_all().await
}

/// Choices for the food entry form: visible types ordered by label
pub async fn visible_choices() -> anyhow::Result<Vec<Choice>> {
    Ok(repository::list_visible()
        .await?
        .into_iter()
        .map(|food_type| (food_type.id.0, food_type.label))
        .collect())
}

/// Labels of every food type, hidden ones included
pub async fn labels_by_id() -> anyhow::Result<HashMap<FoodTypeId, String>> {
    Ok(list_all()
        .await?
        .into_iter()
        .map(|food_type| (food_type.id, food_type.label))
        .collect())
}
