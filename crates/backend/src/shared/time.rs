//! Day boundaries in the configured time zone
//!
//! Entries are stored in UTC; "today" and the history range are local
//! calendar days converted back to UTC instants.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Local calendar date of `now`
pub fn local_date(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// UTC instant of local midnight starting `date`
pub fn start_of_local_day(tz: Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    match tz.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // midnight skipped by a DST jump; the day starts at the first valid hour
        None => tz
            .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight)),
    }
}

/// Beginning of the current local day, as UTC
pub fn beginning_of_day_utc(tz: Tz, now: DateTime<Utc>) -> DateTime<Utc> {
    start_of_local_day(tz, local_date(tz, now))
}

/// Monday of the local week containing `now`
pub fn beginning_of_week(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    let today = local_date(tz, now);
    today - Days::new(today.weekday().num_days_from_monday() as u64)
}

/// Half-open UTC range `[start, end + 1 day)` covering both local dates
pub fn local_range_utc(tz: Tz, start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let after_end = end.checked_add_days(Days::new(1)).unwrap_or(end);
    (start_of_local_day(tz, start), start_of_local_day(tz, after_end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_beginning_of_day_in_new_york() {
        // 02:00 UTC on the 15th is still the 14th in New York (EST, UTC-5)
        let now = utc("2024-01-15T02:00:00Z");
        assert_eq!(local_date(New_York, now), NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert_eq!(beginning_of_day_utc(New_York, now), utc("2024-01-14T05:00:00Z"));
    }

    #[test]
    fn test_beginning_of_day_in_summer() {
        let now = utc("2024-07-01T12:00:00Z");
        assert_eq!(beginning_of_day_utc(New_York, now), utc("2024-07-01T04:00:00Z"));
    }

    #[test]
    fn test_beginning_of_week_is_monday() {
        // Sunday 2024-03-17
        let now = utc("2024-03-17T18:00:00Z");
        assert_eq!(beginning_of_week(Tz::UTC, now), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        // Monday stays Monday
        let now = utc("2024-03-11T00:30:00Z");
        assert_eq!(beginning_of_week(Tz::UTC, now), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn test_range_includes_end_day() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let (from, to) = local_range_utc(Tz::UTC, start, end);
        assert_eq!(from, utc("2024-03-01T00:00:00Z"));
        assert_eq!(to, utc("2024-03-04T00:00:00Z"));
    }
}
