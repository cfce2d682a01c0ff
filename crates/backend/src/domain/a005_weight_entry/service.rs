use super::{form, repository};
use chrono::Utc;
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a002_guinea_pig::aggregate::GuineaPigId;
use contracts::domain::a005_weight_entry::aggregate::{WeightEntry, WeightEntryDto, WeightEntryId};
use contracts::domain::common::ValidationErrors;
use contracts::shared::form_fields::FormFields;

use crate::domain::a002_guinea_pig;
use crate::shared::modal_form::FormReply;

pub async fn new_form() -> anyhow::Result<String> {
    let guinea_pigs = a002_guinea_pig::service::choices().await?;
    Ok(form::render(
        &WeightEntryDto::default(),
        &guinea_pigs,
        &ValidationErrors::new(),
        false,
    ))
}

pub async fn edit_form(entry: &WeightEntry) -> anyhow::Result<String> {
    let guinea_pigs = a002_guinea_pig::service::choices().await?;
    Ok(form::render(
        &WeightEntryDto::from(entry),
        &guinea_pigs,
        &ValidationErrors::new(),
        true,
    ))
}

/// Validate a submission and store it, or re-render the form with errors
pub async fn submit(
    existing: Option<WeightEntry>,
    fields: &FormFields,
    user_id: UserId,
) -> anyhow::Result<FormReply> {
    let guinea_pigs = a002_guinea_pig::service::choices().await?;
    let known: Vec<GuineaPigId> = guinea_pigs.iter().map(|(id, _)| GuineaPigId(*id)).collect();
    let dto = WeightEntryDto::from_fields(fields);

    let mut errors = ValidationErrors::new();
    if let Err(e) = dto.validate() {
        errors.merge(e);
    }
    if let Err(e) = dto.validate_choices(&known) {
        errors.merge(e);
    }
    if !errors.is_empty() {
        return Ok(FormReply::Invalid(form::render(
            &dto,
            &guinea_pigs,
            &errors,
            existing.is_some(),
        )));
    }

    match existing {
        Some(mut entry) => {
            entry.update(&dto, user_id);
            repository::update(&entry).await?;
            tracing::info!("Updated weight entry {}", entry.id);
        }
        None => {
            let (Some(value), Some(guinea_pig_id)) = (dto.parsed_value(), dto.guinea_pig_id) else {
                anyhow::bail!("validated weight entry without value or guinea pig");
            };
            let entry = WeightEntry {
                id: WeightEntryId(0),
                value,
                guinea_pig_id,
                user_id: Some(user_id),
                utc_date: Utc::now(),
            };
            let id = repository::insert(&entry).await?;
            tracing::info!("Created weight entry {} ({} g)", id, value);
        }
    }
    Ok(FormReply::Saved)
}

pub async fn get_by_id(id: WeightEntryId) -> anyhow::Result<Option<WeightEntry>> {
    repository::get_by_id(id).await
}
