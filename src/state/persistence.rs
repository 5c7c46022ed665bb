use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::insights::{classify_food_group, classify_processing_level, meal_cost};
use crate::models::{Diet, Insights};

/// Load diets from a JSON file holding one diet or a list of them.
///
/// Diets are returned as written; `DietStore::new` resolves duplicate ids.
pub fn load_diets<P: AsRef<Path>>(path: P) -> Result<Vec<Diet>> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

/// Save insights to a JSON file.
pub fn save_insights<P: AsRef<Path>>(path: P, insights: &Insights) -> Result<()> {
    let json = serde_json::to_string_pretty(insights)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write one CSV row per classified food occurrence.
///
/// Meals without itemized foods appear once, under the meal's own name.
pub fn write_food_report<P: AsRef<Path>>(path: P, diet: &Diet) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal_id", "meal_type", "food", "level", "group", "cost"])?;

    for meal in &diet.meals {
        if meal.foods.is_empty() {
            wtr.write_record([
                meal.id.clone(),
                meal.meal_type.to_string(),
                meal.name.clone(),
                classify_processing_level(&meal.name).to_string(),
                classify_food_group(&meal.name).to_string(),
                format!("{:.2}", meal_cost(meal)),
            ])?;
            continue;
        }
        for food in &meal.foods {
            wtr.write_record([
                meal.id.clone(),
                meal.meal_type.to_string(),
                food.name.clone(),
                classify_processing_level(&food.name).to_string(),
                classify_food_group(&food.name).to_string(),
                food.cost.map(|c| format!("{:.2}", c)).unwrap_or_default(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
