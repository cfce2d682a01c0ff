use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use contracts::domain::a004_food_entry::aggregate::FoodEntry;
use contracts::domain::a005_weight_entry::aggregate::WeightEntry;
use contracts::domain::a006_vitamin_c_entry::aggregate::VitaminCEntry;
use contracts::projections::p900_history::dto::{
    HistoryKind, HistoryQuery, HistoryResponse, HistoryRow,
};

use crate::dashboards::d400_daily_summary::service::Names;
use crate::domain::{a004_food_entry, a005_weight_entry, a006_vitamin_c_entry};
use crate::shared::error::AppError;
use crate::shared::time::{beginning_of_week, local_date, local_range_utc};

/// Fill in missing dates: the week's Monday through today
///
/// A start after the end is rejected.
pub fn resolve_range(
    query: &HistoryQuery,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start = query.start.unwrap_or_else(|| beginning_of_week(tz, now));
    let end = query.end.unwrap_or_else(|| local_date(tz, now));
    if start > end {
        return Err(AppError::BadRequest(
            "start date must not be after end date".into(),
        ));
    }
    Ok((start, end))
}

pub fn food_rows(entries: &[FoodEntry], names: &Names) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|e| HistoryRow {
            utc_date: e.utc_date,
            kind: HistoryKind::Food,
            detail: names
                .food_types
                .get(&e.food_type_id)
                .cloned()
                .unwrap_or_default(),
            guinea_pigs: names.guinea_pigs(&e.guinea_pig_ids).join(", "),
            user_name: names.user(e.user_id).unwrap_or_default(),
        })
        .collect()
}

pub fn weight_rows(entries: &[WeightEntry], names: &Names) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|e| HistoryRow {
            utc_date: e.utc_date,
            kind: HistoryKind::Weight,
            detail: e.value.to_string(),
            guinea_pigs: names
                .guinea_pigs
                .get(&e.guinea_pig_id)
                .cloned()
                .unwrap_or_default(),
            user_name: names.user(e.user_id).unwrap_or_default(),
        })
        .collect()
}

pub fn vitamin_c_rows(entries: &[VitaminCEntry], names: &Names) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|e| HistoryRow {
            utc_date: e.utc_date,
            kind: HistoryKind::VitaminC,
            detail: String::new(),
            guinea_pigs: String::new(),
            user_name: names.user(e.user_id).unwrap_or_default(),
        })
        .collect()
}

/// Merge already sorted streams into one list ordered by `utc_date`
///
/// Equal timestamps keep stream order: food, weight, vitamin C.
pub fn merge_history(streams: Vec<Vec<HistoryRow>>) -> Vec<HistoryRow> {
    let mut merged: Vec<HistoryRow> = streams.into_iter().flatten().collect();
    merged.sort_by_key(|row| row.utc_date);
    merged
}

pub async fn get_history(
    query: &HistoryQuery,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<HistoryResponse, AppError> {
    let (start, end) = resolve_range(query, tz, now)?;
    let (from, until) = local_range_utc(tz, start, end);

    let food = a004_food_entry::repository::list_in_range(Some(from), Some(until)).await?;
    let weights = a005_weight_entry::repository::list_in_range(Some(from), Some(until)).await?;
    let vitamin_c = a006_vitamin_c_entry::repository::list_in_range(Some(from), Some(until)).await?;
    let names = Names::load().await?;

    let entries = merge_history(vec![
        food_rows(&food, &names),
        weight_rows(&weights, &names),
        vitamin_c_rows(&vitamin_c, &names),
    ]);
    tracing::debug!("History {}..={}: {} rows", start, end, entries.len());

    Ok(HistoryResponse {
        start: Some(start),
        end: Some(end),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;
    use contracts::domain::a001_user::aggregate::UserId;
    use contracts::domain::a002_guinea_pig::aggregate::GuineaPigId;
    use contracts::domain::a005_weight_entry::aggregate::WeightEntryId;
    use contracts::domain::a006_vitamin_c_entry::aggregate::VitaminCEntryId;
    use std::collections::HashMap;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 8, hour, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_week_to_date() {
        // Wednesday afternoon in New York
        let now = Utc.with_ymd_and_hms(2024, 5, 8, 18, 0, 0).unwrap();
        let (start, end) = resolve_range(&HistoryQuery::default(), New_York, now).unwrap();
        assert_eq!(start, date(2024, 5, 6));
        assert_eq!(end, date(2024, 5, 8));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let query = HistoryQuery {
            start: Some(date(2024, 5, 9)),
            end: Some(date(2024, 5, 1)),
        };
        let err = resolve_range(&query, New_York, at(12)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let same_day = HistoryQuery {
            start: Some(date(2024, 5, 1)),
            end: Some(date(2024, 5, 1)),
        };
        assert!(resolve_range(&same_day, New_York, at(12)).is_ok());
    }

    #[test]
    fn test_merge_orders_by_date() {
        let names = Names {
            guinea_pigs: HashMap::from([(GuineaPigId(1), "Oreo".to_string())]),
            users: HashMap::from([(UserId(1), "anna".to_string())]),
            ..Names::default()
        };
        let weights = vec![
            WeightEntry {
                id: WeightEntryId(1),
                value: 1012.5,
                guinea_pig_id: GuineaPigId(1),
                user_id: Some(UserId(1)),
                utc_date: at(9),
            },
            WeightEntry {
                id: WeightEntryId(2),
                value: 990.0,
                guinea_pig_id: GuineaPigId(1),
                user_id: None,
                utc_date: at(15),
            },
        ];
        let vitamin_c = vec![VitaminCEntry {
            id: VitaminCEntryId(1),
            user_id: Some(UserId(1)),
            utc_date: at(11),
        }];

        let merged = merge_history(vec![
            Vec::new(),
            weight_rows(&weights, &names),
            vitamin_c_rows(&vitamin_c, &names),
        ]);
        let kinds: Vec<HistoryKind> = merged.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![HistoryKind::Weight, HistoryKind::VitaminC, HistoryKind::Weight]
        );
        assert_eq!(merged[0].detail, "1012.5");
        assert_eq!(merged[0].guinea_pigs, "Oreo");
        assert_eq!(merged[1].user_name, "anna");
        assert_eq!(merged[2].user_name, "");
    }

    #[test]
    fn test_equal_timestamps_keep_stream_order() {
        let names = Names::default();
        let vitamin_c = vec![VitaminCEntry {
            id: VitaminCEntryId(1),
            user_id: None,
            utc_date: at(10),
        }];
        let weights = vec![WeightEntry {
            id: WeightEntryId(1),
            value: 800.0,
            guinea_pig_id: GuineaPigId(3),
            user_id: None,
            utc_date: at(10),
        }];
        let merged = merge_history(vec![
            weight_rows(&weights, &names),
            vitamin_c_rows(&vitamin_c, &names),
        ]);
        assert_eq!(merged[0].kind, HistoryKind::Weight);
        assert_eq!(merged[1].kind, HistoryKind::VitaminC);
    }
}
