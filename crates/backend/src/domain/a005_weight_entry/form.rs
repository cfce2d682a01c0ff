use contracts::domain::a005_weight_entry::aggregate::{WeightEntry, WeightEntryDto};
use contracts::domain::common::{AggregateRoot, ValidationErrors};

use crate::shared::html::{self, Choice};

pub fn render(
    dto: &WeightEntryDto,
    guinea_pigs: &[Choice],
    errors: &ValidationErrors,
    is_edit: bool,
) -> String {
    let title = format!(
        "{} {}",
        if is_edit { "Edit" } else { "New" },
        WeightEntry::element_name()
    );
    html::modal_form(
        &title,
        &[
            html::select(
                "guinea_pig_id",
                "guinea pig",
                guinea_pigs,
                dto.guinea_pig_id.map(|id| id.0),
                errors.for_field("guinea_pig_id"),
            ),
            html::number_input("value", "weight (g)", &dto.value, "any", errors.for_field("value")),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form_fields::FormFields;

    #[test]
    fn test_invalid_value_is_echoed() {
        let dto = WeightEntryDto::from_fields(&FormFields::parse("value=heavy&guinea_pig_id=1"));
        let errors = dto.validate().unwrap_err();
        let fragment = render(&dto, &[(1, "Oreo".into())], &errors, false);
        assert!(fragment.contains(r#"value="heavy""#));
        assert!(fragment.contains("Not"));
        assert!(fragment.contains(r#"<option value="1" selected>"#));
    }
}
