//! Display helpers for UTC timestamps, shown in the browser's local time

use chrono::{DateTime, Local, Utc};

/// "14:02"
pub fn format_time(utc: DateTime<Utc>) -> String {
    utc.with_timezone(&Local).format("%H:%M").to_string()
}

/// "2024-03-15 14:02"
pub fn format_datetime(utc: DateTime<Utc>) -> String {
    utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Weight in grams without a trailing ".0"
pub fn format_weight(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0} g", value)
    } else {
        format!("{} g", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(1012.0), "1012 g");
        assert_eq!(format_weight(1012.5), "1012.5 g");
    }

    #[test]
    fn test_format_datetime_shape() {
        let utc = DateTime::parse_from_rfc3339("2024-03-15T14:02:26Z")
            .unwrap()
            .with_timezone(&Utc);
        let text = format_datetime(utc);
        assert_eq!(text.len(), "2024-03-15 14:02".len());
        assert_eq!(format_time(utc).len(), 5);
    }
}
