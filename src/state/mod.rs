mod cache;
mod manager;
mod persistence;

pub use cache::InsightsCache;
pub use manager::DietStore;
pub use persistence::{load_diets, save_insights, write_food_report};
