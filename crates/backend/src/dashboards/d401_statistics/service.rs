use chrono::{DateTime, Utc};
use contracts::dashboards::d401_statistics::dto::{FoodStatistics, LatestWeight, StatisticsResponse};
use contracts::domain::a002_guinea_pig::aggregate::{GuineaPig, GuineaPigId};
use contracts::domain::a003_food_type::aggregate::{FoodType, FoodTypeId};
use contracts::domain::a004_food_entry::aggregate::FoodEntry;
use contracts::domain::a005_weight_entry::aggregate::WeightEntry;
use std::collections::HashMap;

use crate::domain::{a002_guinea_pig, a003_food_type, a004_food_entry, a005_weight_entry};

/// Per-type tally: entry count and last feeding
struct Tally<'a> {
    label: &'a str,
    count: usize,
    last_fed: Option<DateTime<Utc>>,
}

/// Food statistics over counted types (`in_statistics` and not hidden)
///
/// Frequency ranks include types never fed; recency ranks only types fed at
/// least once. Ties go to the alphabetically first label.
pub fn compute_food_statistics(food_types: &[FoodType], entries: &[FoodEntry]) -> FoodStatistics {
    let mut tallies: HashMap<FoodTypeId, Tally> = food_types
        .iter()
        .filter(|t| t.is_counted())
        .map(|t| {
            (
                t.id,
                Tally {
                    label: &t.label,
                    count: 0,
                    last_fed: None,
                },
            )
        })
        .collect();

    for entry in entries {
        if let Some(tally) = tallies.get_mut(&entry.food_type_id) {
            tally.count += 1;
            tally.last_fed = tally.last_fed.max(Some(entry.utc_date));
        }
    }

    let mut tallies: Vec<Tally> = tallies.into_values().collect();
    tallies.sort_by(|a, b| a.label.cmp(b.label));

    let least_frequent = tallies.iter().min_by_key(|t| t.count);
    let most_frequent = tallies
        .iter()
        .rev()
        .max_by_key(|t| t.count);
    let fed: Vec<(&Tally, DateTime<Utc>)> = tallies
        .iter()
        .filter_map(|t| t.last_fed.map(|d| (t, d)))
        .collect();
    let oldest = fed.iter().min_by_key(|(_, d)| *d);
    let latest = fed.iter().rev().max_by_key(|(_, d)| *d);

    FoodStatistics {
        least_frequent: least_frequent.map(|t| t.label.to_string()),
        most_frequent: most_frequent.map(|t| t.label.to_string()),
        oldest: oldest.map(|(t, _)| t.label.to_string()),
        latest: latest.map(|(t, _)| t.label.to_string()),
    }
}

/// Most recent weight of each guinea pig, in the order of `guinea_pigs`
pub fn latest_weights(guinea_pigs: &[GuineaPig], weights: &[WeightEntry]) -> Vec<LatestWeight> {
    let mut latest: HashMap<GuineaPigId, &WeightEntry> = HashMap::new();
    for weight in weights {
        let current = latest.entry(weight.guinea_pig_id).or_insert(weight);
        if weight.utc_date > current.utc_date {
            *current = weight;
        }
    }

    guinea_pigs
        .iter()
        .map(|pig| LatestWeight {
            guinea_pig: pig.name.clone(),
            value: latest.get(&pig.id).map(|w| w.value),
        })
        .collect()
}

pub async fn get_statistics() -> anyhow::Result<StatisticsResponse> {
    let food_types = a003_food_type::repository::list_all().await?;
    let entries = a004_food_entry::repository::list_all_bare().await?;
    let guinea_pigs = a002_guinea_pig::repository::list_all().await?;
    let weights = a005_weight_entry::repository::list_all().await?;

    Ok(StatisticsResponse {
        food: compute_food_statistics(&food_types, &entries),
        weights: latest_weights(&guinea_pigs, &weights),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a004_food_entry::aggregate::FoodEntryId;
    use contracts::domain::a005_weight_entry::aggregate::WeightEntryId;

    fn food_type(id: i64, label: &str, in_statistics: bool, is_hidden: bool) -> FoodType {
        FoodType {
            id: FoodTypeId(id),
            label: label.into(),
            recommendations: None,
            in_statistics,
            is_hidden,
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn fed(id: i64, food_type_id: i64, day: u32) -> FoodEntry {
        FoodEntry {
            id: FoodEntryId(id),
            food_type_id: FoodTypeId(food_type_id),
            notes: None,
            guinea_pig_ids: Vec::new(),
            user_id: None,
            utc_date: at(day),
        }
    }

    #[test]
    fn test_food_statistics() {
        let types = vec![
            food_type(1, "Hay", true, false),
            food_type(2, "Kale", true, false),
            food_type(3, "Parsley", true, false),
            food_type(4, "Treats", false, false),
            food_type(5, "Carrot", true, true),
        ];
        let entries = vec![
            fed(1, 1, 1),
            fed(2, 1, 2),
            fed(3, 2, 3),
            fed(4, 4, 9),
            fed(5, 5, 9),
            fed(6, 1, 4),
        ];
        let stats = compute_food_statistics(&types, &entries);
        assert_eq!(stats.most_frequent.as_deref(), Some("Hay"));
        // never fed, still counted
        assert_eq!(stats.least_frequent.as_deref(), Some("Parsley"));
        assert_eq!(stats.latest.as_deref(), Some("Hay"));
        assert_eq!(stats.oldest.as_deref(), Some("Kale"));
    }

    #[test]
    fn test_food_statistics_ties_pick_first_label() {
        let types = vec![food_type(1, "Kale", true, false), food_type(2, "Hay", true, false)];
        let entries = vec![fed(1, 1, 5), fed(2, 2, 5)];
        let stats = compute_food_statistics(&types, &entries);
        assert_eq!(stats.least_frequent.as_deref(), Some("Hay"));
        assert_eq!(stats.most_frequent.as_deref(), Some("Hay"));
        assert_eq!(stats.latest.as_deref(), Some("Hay"));
        assert_eq!(stats.oldest.as_deref(), Some("Hay"));
    }

    #[test]
    fn test_food_statistics_empty() {
        assert_eq!(compute_food_statistics(&[], &[]), FoodStatistics::default());
        let types = vec![food_type(1, "Hay", true, false)];
        let stats = compute_food_statistics(&types, &[]);
        assert_eq!(stats.least_frequent.as_deref(), Some("Hay"));
        assert_eq!(stats.latest, None);
    }

    #[test]
    fn test_latest_weights() {
        let pigs = vec![
            GuineaPig {
                id: GuineaPigId(2),
                name: "Oreo".into(),
            },
            GuineaPig {
                id: GuineaPigId(1),
                name: "Pumpkin".into(),
            },
        ];
        let weight = |id, pig, value, day| WeightEntry {
            id: WeightEntryId(id),
            value,
            guinea_pig_id: GuineaPigId(pig),
            user_id: None,
            utc_date: at(day),
        };
        let weights = vec![weight(1, 2, 900.0, 3), weight(2, 2, 950.5, 1)];
        let latest = latest_weights(&pigs, &weights);
        assert_eq!(
            latest,
            vec![
                LatestWeight {
                    guinea_pig: "Oreo".into(),
                    value: Some(900.0)
                },
                LatestWeight {
                    guinea_pig: "Pumpkin".into(),
                    value: None
                },
            ]
        );
    }
}
