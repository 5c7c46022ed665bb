use std::fmt;

use serde::{Deserialize, Serialize};

/// A single itemized food inside a meal.
///
/// `cost` is optional; meals without any explicit cost fall back to a
/// calorie-based estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl FoodItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost: None,
        }
    }

    /// Builder-style setter for an explicit cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }
}

/// How industrially altered a food is, from least to most processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessingLevel {
    SinProcesar,
    MinimamenteProcesado,
    Procesado,
    UltraProcesado,
}

impl ProcessingLevel {
    /// All levels in ordinal order.
    pub const ALL: [ProcessingLevel; 4] = [
        ProcessingLevel::SinProcesar,
        ProcessingLevel::MinimamenteProcesado,
        ProcessingLevel::Procesado,
        ProcessingLevel::UltraProcesado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingLevel::SinProcesar => "sin-procesar",
            ProcessingLevel::MinimamenteProcesado => "minimamente-procesado",
            ProcessingLevel::Procesado => "procesado",
            ProcessingLevel::UltraProcesado => "ultra-procesado",
        }
    }
}

impl fmt::Display for ProcessingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse nutritional category used to measure variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodGroup {
    #[serde(rename = "frutas")]
    Frutas,
    #[serde(rename = "verduras")]
    Verduras,
    #[serde(rename = "cereales")]
    Cereales,
    #[serde(rename = "proteínas")]
    Proteinas,
    #[serde(rename = "lácteos")]
    Lacteos,
    #[serde(rename = "grasas")]
    Grasas,
    #[serde(rename = "otros")]
    Otros,
}

impl FoodGroup {
    /// All groups in report order; `Otros` is always last.
    pub const ALL: [FoodGroup; 7] = [
        FoodGroup::Frutas,
        FoodGroup::Verduras,
        FoodGroup::Cereales,
        FoodGroup::Proteinas,
        FoodGroup::Lacteos,
        FoodGroup::Grasas,
        FoodGroup::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::Frutas => "frutas",
            FoodGroup::Verduras => "verduras",
            FoodGroup::Cereales => "cereales",
            FoodGroup::Proteinas => "proteínas",
            FoodGroup::Lacteos => "lácteos",
            FoodGroup::Grasas => "grasas",
            FoodGroup::Otros => "otros",
        }
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item_missing_cost_deserializes() {
        let item: FoodItem = serde_json::from_str(r#"{"id": "f1", "name": "Manzana"}"#).unwrap();
        assert_eq!(item.cost, None);
    }

    #[test]
    fn test_level_serializes_kebab_case() {
        let json = serde_json::to_string(&ProcessingLevel::MinimamenteProcesado).unwrap();
        assert_eq!(json, "\"minimamente-procesado\"");
    }

    #[test]
    fn test_group_serializes_with_accents() {
        let json = serde_json::to_string(&FoodGroup::Proteinas).unwrap();
        assert_eq!(json, "\"proteínas\"");
        assert_eq!(FoodGroup::Lacteos.to_string(), "lácteos");
    }

    #[test]
    fn test_level_ordering() {
        assert!(ProcessingLevel::SinProcesar < ProcessingLevel::UltraProcesado);
    }
}
