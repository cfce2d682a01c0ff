use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-keyed validation messages collected while checking a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages for one field, empty when the field is valid
    pub fn for_field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.fields {
            self.fields.entry(field).or_default().extend(messages);
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Required text of at most `max` characters
pub fn check_text(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        errors.add(field, "This field is required.");
    } else {
        check_length(errors, field, value, max);
    }
}

/// Optional text of at most `max` characters
pub fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Field cannot be longer than {} characters.", max),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        errors.add("value", "bad");
        assert_eq!(errors.for_field("name"), ["first", "second"]);
        assert!(errors.for_field("notes").is_empty());
        assert_eq!(errors.to_string(), "name: first, second; value: bad");
    }

    #[test]
    fn test_check_text() {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", "   ", 64);
        check_text(&mut errors, "label", &"x".repeat(65), 64);
        check_text(&mut errors, "ok", "Popcorn", 64);
        assert_eq!(errors.for_field("name"), ["This field is required."]);
        assert!(errors.has("label"));
        assert!(!errors.has("ok"));
    }
}
