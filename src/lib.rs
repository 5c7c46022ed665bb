pub mod cli;
pub mod error;
pub mod insights;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{InsightsError, Result};
pub use insights::{generate_insights, generate_insights_at};
pub use models::{Diet, FoodItem, Insights, Meal, MealType};
