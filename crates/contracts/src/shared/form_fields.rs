//! `application/x-www-form-urlencoded` bodies as an ordered multimap
//!
//! The modal form is serialized in the browser and parsed on the server with
//! the same type, so repeated keys (multi-selects) and checkbox presence mean
//! the same thing on both sides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a url-encoded body; undecodable escapes are kept verbatim
    pub fn parse(body: &str) -> Self {
        let pairs = body
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `name`, trimmed, `None` when blank
    pub fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Every value for `name` in submission order
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Browsers only submit checked checkboxes, with "y" or "on" as value
    pub fn is_checked(&self, name: &str) -> bool {
        match self.get(name) {
            Some(v) => !matches!(v.trim().to_lowercase().as_str(), "" | "false" | "0" | "n" | "no" | "off"),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_plus_and_escapes() {
        let fields = FormFields::parse("name=Mr+Pickles&notes=hay%20%26%20pellets&empty=");
        assert_eq!(fields.get("name"), Some("Mr Pickles"));
        assert_eq!(fields.get("notes"), Some("hay & pellets"));
        assert_eq!(fields.get("empty"), Some(""));
        assert_eq!(fields.get_non_empty("empty"), None);
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let fields = FormFields::parse("guinea_pig_ids=3&food_type_id=1&guinea_pig_ids=1");
        assert_eq!(fields.get_all("guinea_pig_ids"), vec!["3", "1"]);
        assert_eq!(fields.get("guinea_pig_ids"), Some("3"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let fields = FormFields::new()
            .with("notes", "a&b=c d")
            .with("id", "7");
        assert_eq!(fields.encode(), "notes=a%26b%3Dc%20d&id=7");
        assert_eq!(FormFields::parse(&fields.encode()), fields);
    }

    #[test]
    fn test_checkbox_presence() {
        let fields = FormFields::parse("is_hidden=y&in_statistics=false&x=on");
        assert!(fields.is_checked("is_hidden"));
        assert!(fields.is_checked("x"));
        assert!(!fields.is_checked("in_statistics"));
        assert!(!fields.is_checked("absent"));
    }

    #[test]
    fn test_key_without_value_and_stray_separators() {
        let fields = FormFields::parse("&flag&&a=1&");
        assert_eq!(fields.get("flag"), Some(""));
        assert_eq!(fields.get("a"), Some("1"));
        assert_eq!(fields.len(), 2);
    }
}
