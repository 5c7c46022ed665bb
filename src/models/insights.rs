use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FoodGroup, MealType, ProcessingLevel};

/// Cost attributed to one meal type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTypeCost {
    pub meal_type: MealType,
    pub cost: f64,
    pub percentage: f64,
}

/// Daily cost compared against the fixed market benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketComparison {
    pub benchmark: f64,
    /// Positive means more expensive than the benchmark.
    pub difference: f64,
    pub percent_difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInsight {
    pub cost_per_day: f64,
    pub cost_per_week: f64,
    pub cost_per_month: f64,
    pub cost_per_meal: f64,
    pub by_meal_type: Vec<MealTypeCost>,
    pub market_comparison: MarketComparison,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodGroupShare {
    pub group: FoodGroup,
    /// Unique foods in this group.
    pub count: usize,
    pub percentage: f64,
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyInsight {
    pub groups: Vec<FoodGroupShare>,
    pub total_unique_foods: usize,
    pub variety_score: f64,
    pub recommendations: Vec<String>,
}

/// One classified food occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFood {
    pub food_id: String,
    pub name: String,
    pub level: ProcessingLevel,
    /// Share of all classified occurrences, in percent.
    pub share_of_diet: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelShare {
    pub level: ProcessingLevel,
    pub percentage: f64,
    pub foods: Vec<ProcessedFood>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingInsight {
    pub distribution: Vec<LevelShare>,
    /// 0-100, higher means less processed.
    pub processing_score: f64,
    pub recommendations: Vec<String>,
    pub ultra_processed_foods: Vec<ProcessedFood>,
}

impl ProcessingInsight {
    /// Percentage for a level (0 if the level is missing from the distribution).
    pub fn percentage_of(&self, level: ProcessingLevel) -> f64 {
        self.distribution
            .iter()
            .find(|share| share.level == level)
            .map(|share| share.percentage)
            .unwrap_or(0.0)
    }
}

/// The combined health insights for one diet snapshot.
///
/// Built in one step by the aggregator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub diet_id: String,
    pub client_id: String,
    pub cost: CostInsight,
    pub variety: VarietyInsight,
    pub processing: ProcessingInsight,
    pub overall_score: f64,
    pub summary: String,
    pub prioritized_recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
