use super::form::{self, FoodEntryChoices};
use super::repository;
use chrono::Utc;
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a002_guinea_pig::aggregate::GuineaPigId;
use contracts::domain::a003_food_type::aggregate::FoodTypeId;
use contracts::domain::a004_food_entry::aggregate::{FoodEntry, FoodEntryDto, FoodEntryId};
use contracts::domain::common::ValidationErrors;
use contracts::shared::form_fields::FormFields;

use crate::domain::{a002_guinea_pig, a003_food_type};
use crate::shared::modal_form::FormReply;

async fn load_choices() -> anyhow::Result<FoodEntryChoices> {
    Ok(FoodEntryChoices {
        food_types: a003_food_type::service::visible_choices().await?,
        guinea_pigs: a002_guinea_pig::service::choices().await?,
    })
}

/// New entries start with every guinea pig selected
pub async fn new_form() -> anyhow::Result<String> {
    let choices = load_choices().await?;
    let dto = FoodEntryDto {
        guinea_pig_ids: choices.guinea_pigs.iter().map(|(id, _)| GuineaPigId(*id)).collect(),
        ..FoodEntryDto::default()
    };
    Ok(form::render(&dto, &choices, &ValidationErrors::new(), false))
}

pub async fn edit_form(entry: &FoodEntry) -> anyhow::Result<String> {
    let choices = load_choices().await?;
    Ok(form::render(
        &FoodEntryDto::from(entry),
        &choices,
        &ValidationErrors::new(),
        true,
    ))
}

fn check(dto: &FoodEntryDto, choices: &FoodEntryChoices) -> Result<(), ValidationErrors> {
    let food_types: Vec<FoodTypeId> = choices.food_types.iter().map(|(id, _)| FoodTypeId(*id)).collect();
    let guinea_pigs: Vec<GuineaPigId> =
        choices.guinea_pigs.iter().map(|(id, _)| GuineaPigId(*id)).collect();

    let mut errors = ValidationErrors::new();
    if let Err(e) = dto.validate() {
        errors.merge(e);
    }
    if let Err(e) = dto.validate_choices(&food_types, &guinea_pigs) {
        errors.merge(e);
    }
    errors.into_result()
}

/// Validate a submission and store it, or re-render the form with errors
///
/// The submitting user becomes the entry's user; a new entry is stamped now.
pub async fn submit(
    existing: Option<FoodEntry>,
    fields: &FormFields,
    user_id: UserId,
) -> anyhow::Result<FormReply> {
    let choices = load_choices().await?;
    let dto = FoodEntryDto::from_fields(fields);
    if let Err(errors) = check(&dto, &choices) {
        return Ok(FormReply::Invalid(form::render(
            &dto,
            &choices,
            &errors,
            existing.is_some(),
        )));
    }

    match existing {
        Some(mut entry) => {
            entry.update(&dto, user_id);
            repository::update(&entry).await?;
            tracing::info!("Updated food entry {}", entry.id);
        }
        None => {
            let Some(food_type_id) = dto.food_type_id else {
                anyhow::bail!("validated food entry without a food type");
            };
            let entry = FoodEntry {
                id: FoodEntryId(0),
                food_type_id,
                notes: dto.notes_value(),
                guinea_pig_ids: dto.guinea_pig_ids.clone(),
                user_id: Some(user_id),
                utc_date: Utc::now(),
            };
            let id = repository::insert(&entry).await?;
            tracing::info!(
                "Created food entry {} for {} guinea pig(s)",
                id,
                entry.guinea_pig_ids.len()
            );
        }
    }
    Ok(FormReply::Saved)
}

pub async fn get_by_id(id: FoodEntryId) -> anyhow::Result<Option<FoodEntry>> {
    repository::get_by_id(id).await
}

/// Delete by the raw form id; anything but a decimal id is ignored
pub async fn delete_by_form(fields: &FormFields) -> anyhow::Result<bool> {
    let Some(id) = parse_decimal_id(fields.get("id")) else {
        return Ok(false);
    };
    let deleted = repository::delete(FoodEntryId(id)).await?;
    if deleted {
        tracing::info!("Deleted food entry {}", id);
    }
    Ok(deleted)
}

fn parse_decimal_id(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
