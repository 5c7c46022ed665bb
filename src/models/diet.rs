use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::FoodItem;

/// A nutrition plan snapshot: the engine's only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diet {
    pub id: String,

    pub client_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Meal order does not affect scoring but is kept for reproducible output.
    #[serde(default, deserialize_with = "null_as_default")]
    pub meals: Vec<Meal>,
}

impl Diet {
    pub fn new(id: impl Into<String>, client_id: impl Into<String>, meals: Vec<Meal>) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            name: None,
            meals,
        }
    }

    /// Display label: the diet name when present, otherwise its id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Sum of meal calories.
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    #[serde(alias = "breakfast")]
    Desayuno,
    #[serde(alias = "brunch")]
    MediaManana,
    #[serde(alias = "lunch")]
    Almuerzo,
    #[serde(alias = "snack")]
    Merienda,
    #[serde(alias = "dinner")]
    Cena,
    #[serde(alias = "post-workout")]
    PostEntreno,
    /// Any meal type outside the known set.
    #[default]
    #[serde(other)]
    Otra,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Desayuno => "desayuno",
            MealType::MediaManana => "media-manana",
            MealType::Almuerzo => "almuerzo",
            MealType::Merienda => "merienda",
            MealType::Cena => "cena",
            MealType::PostEntreno => "post-entreno",
            MealType::Otra => "otra",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A meal within a diet, optionally itemized into foods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub meal_type: MealType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub foods: Vec<FoodItem>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Meal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        meal_type: MealType,
        calories: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            meal_type,
            calories,
            foods: Vec::new(),
        }
    }

    /// Builder-style setter for the itemized foods.
    pub fn with_foods(mut self, foods: Vec<FoodItem>) -> Self {
        self.foods = foods;
        self
    }

    /// Sum of explicit item costs, or `None` if no item carries a cost.
    pub fn explicit_cost(&self) -> Option<f64> {
        let mut costs = self.foods.iter().filter_map(|f| f.cost).peekable();
        costs.peek()?;
        Some(costs.sum())
    }

    /// `(id, name)` pairs to classify for this meal.
    ///
    /// A meal without itemized foods stands in for itself as a single
    /// pseudo-food named after the meal.
    pub fn food_entries(&self) -> Vec<(&str, &str)> {
        if self.foods.is_empty() {
            vec![(self.id.as_str(), self.name.as_str())]
        } else {
            self.foods
                .iter()
                .map(|f| (f.id.as_str(), f.name.as_str()))
                .collect()
        }
    }
}
