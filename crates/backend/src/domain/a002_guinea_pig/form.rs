use contracts::domain::a002_guinea_pig::aggregate::{GuineaPig, GuineaPigDto, NAME_MAX};
use contracts::domain::common::{AggregateRoot, ValidationErrors};

use crate::shared::html;

/// Modal fragment for adding or editing a guinea pig
pub fn render(dto: &GuineaPigDto, errors: &ValidationErrors, is_edit: bool) -> String {
    let title = format!(
        "{} {}",
        if is_edit { "Edit" } else { "New" },
        GuineaPig::element_name()
    );
    html::modal_form(
        &title,
        &[html::text_input("name", "name", &dto.name, NAME_MAX, errors.for_field("name"))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_value_and_error() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "This field is required.");
        let fragment = render(&GuineaPigDto::default(), &errors, false);
        assert!(fragment.contains(r#"name="name""#));
        assert!(fragment.contains("is-invalid"));
        assert!(fragment.contains("New"));

        let dto = GuineaPigDto {
            name: "Peanut".into(),
        };
        let fragment = render(&dto, &ValidationErrors::new(), true);
        assert!(fragment.contains(r#"value="Peanut""#));
        assert!(!fragment.contains("is-invalid"));
    }
}
