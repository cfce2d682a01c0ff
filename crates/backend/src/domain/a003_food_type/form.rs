use contracts::domain::a003_food_type::aggregate::{
    FoodType, FoodTypeDto, LABEL_MAX, RECOMMENDATIONS_MAX,
};
use contracts::domain::common::{AggregateRoot, ValidationErrors};

use crate::shared::html;

pub fn render(dto: &FoodTypeDto, errors: &ValidationErrors, is_edit: bool) -> String {
    let title = format!(
        "{} {}",
        if is_edit { "Edit" } else { "New" },
        FoodType::element_name()
    );
    html::modal_form(
        &title,
        &[
            html::text_input("label", "label", &dto.label, LABEL_MAX, errors.for_field("label")),
            html::textarea(
                "recommendations",
                "recommendations",
                &dto.recommendations,
                RECOMMENDATIONS_MAX,
                errors.for_field("recommendations"),
            ),
            html::checkbox(
                "in_statistics",
                "show in statistics",
                dto.in_statistics,
                errors.for_field("in_statistics"),
            ),
            html::checkbox("is_hidden", "hidden", dto.is_hidden, errors.for_field("is_hidden")),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_checks_statistics_box() {
        let fragment = render(&FoodTypeDto::default(), &ValidationErrors::new(), false);
        assert!(fragment.contains(r#"name="in_statistics""#));
        assert!(fragment.contains(r#"name="is_hidden""#));
        assert!(fragment.contains("checked"));
    }

    #[test]
    fn test_recommendations_are_escaped() {
        let dto = FoodTypeDto {
            label: "Kale".into(),
            recommendations: "<b>daily</b>".into(),
            ..FoodTypeDto::default()
        };
        let fragment = render(&dto, &ValidationErrors::new(), true);
        assert!(!fragment.contains("<b>daily</b>"));
        assert!(fragment.contains("daily"));
    }
}
