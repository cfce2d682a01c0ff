use super::{form, repository};
use contracts::domain::a002_guinea_pig::aggregate::{GuineaPig, GuineaPigDto, GuineaPigId};
use contracts::domain::common::ValidationErrors;
use contracts::shared::form_fields::FormFields;

use crate::shared::html::Choice;
use crate::shared::modal_form::FormReply;

/// Blank form for a new guinea pig
pub fn new_form() -> String {
    form::render(&GuineaPigDto::default(), &ValidationErrors::new(), false)
}

/// Form prefilled from a stored guinea pig
pub fn edit_form(pig: &GuineaPig) -> String {
    form::render(&GuineaPigDto::from(pig), &ValidationErrors::new(), true)
}

/// Validate a submission and store it, or re-render the form with errors
pub async fn submit(existing: Option<GuineaPig>, fields: &FormFields) -> anyhow::Result<FormReply> {
    let dto = GuineaPigDto::from_fields(fields);
    if let Err(errors) = dto.validate() {
        return Ok(FormReply::Invalid(form::render(&dto, &errors, existing.is_some())));
    }

    match existing {
        Some(mut pig) => {
            pig.update(&dto);
            repository::update(&pig).await?;
            tracing::info!("Updated guinea pig {} ({})", pig.id, pig.name);
        }
        None => {
            let id = repository::insert(&dto).await?;
            tracing::info!("Created guinea pig {} ({})", id, dto.name.trim());
        }
    }
    Ok(FormReply::Saved)
}

pub async fn get_by_id(id: GuineaPigId) -> anyhow::Result<Option<GuineaPig>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<GuineaPig>> {
    repository::list_all().await
}

/// Select choices ordered by name
pub async fn choices() -> anyhow::Result<Vec<Choice>> {
    Ok(list_all()
        .await?
        .into_iter()
        .map(|pig| (pig.id.0, pig.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::shared::data::db::testing;

    #[tokio::test]
    async fn test_submit_keeps_invalid_input_out_of_storage() {
        let _db = testing::database().await;

        let blank = FormFields::parse("name=+++");
        assert!(matches!(submit(None, &blank).await.unwrap(), FormReply::Invalid(_)));

        let reply = submit(None, &FormFields::parse("name=+Pepper+")).await.unwrap();
        assert!(matches!(reply, FormReply::Saved));
        let pig = list_all()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.name == "Pepper")
            .expect("guinea pig stored trimmed");

        let reply = submit(Some(pig.clone()), &FormFields::parse("name=")).await.unwrap();
        assert!(matches!(reply, FormReply::Invalid(html) if html.contains("Edit")));
        assert_eq!(get_by_id(pig.id).await.unwrap().unwrap().name, "Pepper");

        submit(Some(pig.clone()), &FormFields::parse("name=Salt")).await.unwrap();
        assert_eq!(get_by_id(pig.id).await.unwrap().unwrap().name, "Salt");
    }
}
