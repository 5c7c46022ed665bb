pub mod aggregator;
pub mod classifier;
pub mod constants;
pub mod cost;
pub mod processing;
pub mod variety;

pub use aggregator::{
    aggregate, cost_component, generate_insights, generate_insights_at, overall_score,
};
pub use classifier::{classify_food_group, classify_processing_level};
pub use constants::*;
pub use cost::{analyze_cost, meal_cost};
pub use processing::analyze_processing;
pub use variety::{analyze_variety, is_group_recommended, unique_foods_by_group};
