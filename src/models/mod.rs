mod diet;
mod food;
mod insights;

pub use diet::{Diet, Meal, MealType};
pub use food::{FoodGroup, FoodItem, ProcessingLevel};
pub use insights::{
    CostInsight, FoodGroupShare, Insights, LevelShare, MarketComparison, MealTypeCost,
    ProcessedFood, ProcessingInsight, VarietyInsight,
};
