use serde::{Deserialize, Serialize};

/// Food and weight statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub food: FoodStatistics,
    /// Most recent weight of every guinea pig, ordered by name
    pub weights: Vec<LatestWeight>,
}

/// Food type labels picked by each statistic, `None` without data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodStatistics {
    pub least_frequent: Option<String>,
    pub most_frequent: Option<String>,
    /// Type whose last feeding is the oldest
    pub oldest: Option<String>,
    /// Type fed most recently
    pub latest: Option<String>,
}

impl FoodStatistics {
    /// `(caption, label)` pairs in display order
    pub fn rows(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("latest", self.latest.as_deref()),
            ("oldest", self.oldest.as_deref()),
            ("most frequent", self.most_frequent.as_deref()),
            ("least frequent", self.least_frequent.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestWeight {
    pub guinea_pig: String,
    pub value: Option<f64>,
}
