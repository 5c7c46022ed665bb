//! Free-text food classification.
//!
//! Both classifiers are ordered rule tables: the first pattern contained in
//! the lower-cased name wins. Patterns overlap ("queso procesado" and
//! "queso"), so more specific entries must stay above the general ones.

use crate::models::{FoodGroup, ProcessingLevel};

use ProcessingLevel::{MinimamenteProcesado, Procesado, SinProcesar, UltraProcesado};

/// Known foods and their processing level, evaluated top to bottom.
pub const PROCESSING_RULES: &[(&str, ProcessingLevel)] = &[
    // Ultra-processed
    ("queso procesado", UltraProcesado),
    ("queso fundido", UltraProcesado),
    ("yogur azucarado", UltraProcesado),
    ("cereales azucarados", UltraProcesado),
    ("nuggets", UltraProcesado),
    ("salchicha", UltraProcesado),
    ("embutido", UltraProcesado),
    ("chorizo", UltraProcesado),
    ("galleta", UltraProcesado),
    ("bollería", UltraProcesado),
    ("bolleria", UltraProcesado),
    ("donut", UltraProcesado),
    ("snack", UltraProcesado),
    ("refresco", UltraProcesado),
    ("pizza congelada", UltraProcesado),
    ("chuchería", UltraProcesado),
    ("bebida energética", UltraProcesado),
    ("margarina", UltraProcesado),
    // Processed
    ("salmón ahumado", Procesado),
    ("atún en lata", Procesado),
    ("jamón", Procesado),
    ("jamon", Procesado),
    ("bacon", Procesado),
    ("requesón", MinimamenteProcesado),
    ("queso", Procesado),
    ("pan", Procesado),
    ("conserva", Procesado),
    ("mermelada", Procesado),
    ("zumo", Procesado),
    // Minimally processed
    ("leche", MinimamenteProcesado),
    ("yogur", MinimamenteProcesado),
    ("kéfir", MinimamenteProcesado),
    ("arroz", MinimamenteProcesado),
    ("pasta", MinimamenteProcesado),
    ("avena", MinimamenteProcesado),
    ("harina", MinimamenteProcesado),
    ("aceite", MinimamenteProcesado),
    ("lenteja", MinimamenteProcesado),
    ("garbanzo", MinimamenteProcesado),
    ("alubia", MinimamenteProcesado),
    ("legumbre", MinimamenteProcesado),
    ("frutos secos", MinimamenteProcesado),
    ("nueces", MinimamenteProcesado),
    ("almendra", MinimamenteProcesado),
    ("tofu", MinimamenteProcesado),
    ("café", MinimamenteProcesado),
    // Unprocessed
    ("manzana", SinProcesar),
    ("plátano", SinProcesar),
    ("platano", SinProcesar),
    ("naranja", SinProcesar),
    ("fresa", SinProcesar),
    ("pera", SinProcesar),
    ("uva", SinProcesar),
    ("kiwi", SinProcesar),
    ("fruta", SinProcesar),
    ("brócoli", SinProcesar),
    ("brocoli", SinProcesar),
    ("espinaca", SinProcesar),
    ("lechuga", SinProcesar),
    ("tomate", SinProcesar),
    ("zanahoria", SinProcesar),
    ("calabacín", SinProcesar),
    ("verdura", SinProcesar),
    ("ensalada", SinProcesar),
    ("pollo", SinProcesar),
    ("pavo", SinProcesar),
    ("ternera", SinProcesar),
    ("pescado", SinProcesar),
    ("salmón", SinProcesar),
    ("salmon", SinProcesar),
    ("merluza", SinProcesar),
    ("huevo", SinProcesar),
];

/// Keyword fallbacks applied when no known food matches, in order.
pub const PROCESSING_KEYWORDS: &[(&[&str], ProcessingLevel)] = &[
    (&["ultra", "precocinado", "snack"], UltraProcesado),
    (&["procesado", "envasado"], Procesado),
    (&["fresco", "natural"], SinProcesar),
];

/// Level assigned when neither table matches.
pub const DEFAULT_PROCESSING_LEVEL: ProcessingLevel = MinimamenteProcesado;

/// Known foods and their group, evaluated top to bottom.
pub const FOOD_GROUP_RULES: &[(&str, FoodGroup)] = &[
    // Compound names that would otherwise hit a broader pattern
    ("frutos secos", FoodGroup::Grasas),
    ("mantequilla de cacahuete", FoodGroup::Grasas),
    // Dairy
    ("leche", FoodGroup::Lacteos),
    ("queso", FoodGroup::Lacteos),
    ("requesón", FoodGroup::Lacteos),
    ("yogur", FoodGroup::Lacteos),
    ("kéfir", FoodGroup::Lacteos),
    ("helado", FoodGroup::Lacteos),
    // Protein
    ("pollo", FoodGroup::Proteinas),
    ("pavo", FoodGroup::Proteinas),
    ("ternera", FoodGroup::Proteinas),
    ("cerdo", FoodGroup::Proteinas),
    ("carne", FoodGroup::Proteinas),
    ("jamón", FoodGroup::Proteinas),
    ("jamon", FoodGroup::Proteinas),
    ("pescado", FoodGroup::Proteinas),
    ("salmón", FoodGroup::Proteinas),
    ("salmon", FoodGroup::Proteinas),
    ("merluza", FoodGroup::Proteinas),
    ("atún", FoodGroup::Proteinas),
    ("atun", FoodGroup::Proteinas),
    ("gamba", FoodGroup::Proteinas),
    ("huevo", FoodGroup::Proteinas),
    ("tofu", FoodGroup::Proteinas),
    ("lenteja", FoodGroup::Proteinas),
    ("garbanzo", FoodGroup::Proteinas),
    ("alubia", FoodGroup::Proteinas),
    ("legumbre", FoodGroup::Proteinas),
    // Vegetables
    ("brócoli", FoodGroup::Verduras),
    ("brocoli", FoodGroup::Verduras),
    ("espinaca", FoodGroup::Verduras),
    ("lechuga", FoodGroup::Verduras),
    ("tomate", FoodGroup::Verduras),
    ("zanahoria", FoodGroup::Verduras),
    ("calabacín", FoodGroup::Verduras),
    ("calabacin", FoodGroup::Verduras),
    ("pimiento", FoodGroup::Verduras),
    ("cebolla", FoodGroup::Verduras),
    ("pepino", FoodGroup::Verduras),
    ("berenjena", FoodGroup::Verduras),
    ("coliflor", FoodGroup::Verduras),
    ("acelga", FoodGroup::Verduras),
    ("verdura", FoodGroup::Verduras),
    ("ensalada", FoodGroup::Verduras),
    // Fruit
    ("manzana", FoodGroup::Frutas),
    ("plátano", FoodGroup::Frutas),
    ("platano", FoodGroup::Frutas),
    ("naranja", FoodGroup::Frutas),
    ("fresa", FoodGroup::Frutas),
    ("pera", FoodGroup::Frutas),
    ("uva", FoodGroup::Frutas),
    ("kiwi", FoodGroup::Frutas),
    ("piña", FoodGroup::Frutas),
    ("melón", FoodGroup::Frutas),
    ("sandía", FoodGroup::Frutas),
    ("mango", FoodGroup::Frutas),
    ("melocotón", FoodGroup::Frutas),
    ("arándano", FoodGroup::Frutas),
    ("fruta", FoodGroup::Frutas),
    // Grains
    ("arroz", FoodGroup::Cereales),
    ("pasta", FoodGroup::Cereales),
    ("avena", FoodGroup::Cereales),
    ("quinoa", FoodGroup::Cereales),
    ("trigo", FoodGroup::Cereales),
    ("maíz", FoodGroup::Cereales),
    ("cereal", FoodGroup::Cereales),
    ("tostada", FoodGroup::Cereales),
    ("pan", FoodGroup::Cereales),
    ("patata", FoodGroup::Cereales),
    // Fats
    ("aceite", FoodGroup::Grasas),
    ("aguacate", FoodGroup::Grasas),
    ("mantequilla", FoodGroup::Grasas),
    ("aceituna", FoodGroup::Grasas),
    ("nueces", FoodGroup::Grasas),
    ("almendra", FoodGroup::Grasas),
    ("cacahuete", FoodGroup::Grasas),
];

/// Classify a food or meal name by processing level.
///
/// Total: any input, including the empty string, yields a level.
pub fn classify_processing_level(name: &str) -> ProcessingLevel {
    let normalized = name.to_lowercase();

    if let Some(level) = first_match(PROCESSING_RULES, &normalized) {
        return level;
    }

    PROCESSING_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_PROCESSING_LEVEL)
}

/// Classify a food or meal name into a food group, defaulting to `Otros`.
pub fn classify_food_group(name: &str) -> FoodGroup {
    let normalized = name.to_lowercase();
    first_match(FOOD_GROUP_RULES, &normalized).unwrap_or(FoodGroup::Otros)
}

fn first_match<T: Copy>(rules: &[(&str, T)], normalized: &str) -> Option<T> {
    rules
        .iter()
        .find(|(pattern, _)| normalized.contains(pattern))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_rule_precedes_general() {
        assert_eq!(classify_processing_level("Queso procesado"), UltraProcesado);
        assert_eq!(classify_processing_level("Queso curado"), Procesado);
        assert_eq!(classify_processing_level("Requesón"), MinimamenteProcesado);
        assert_eq!(classify_processing_level("Yogur azucarado"), UltraProcesado);
        assert_eq!(classify_processing_level("Yogur griego"), MinimamenteProcesado);
    }

    #[test]
    fn test_keyword_heuristics_in_order() {
        assert_eq!(classify_processing_level("Plato precocinado"), UltraProcesado);
        // "ultra" is checked before "procesado"
        assert_eq!(classify_processing_level("algo ultraprocesado"), UltraProcesado);
        assert_eq!(classify_processing_level("Gazpacho envasado"), Procesado);
        assert_eq!(classify_processing_level("Espárragos frescos"), SinProcesar);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(classify_processing_level("quinoa"), MinimamenteProcesado);
        assert_eq!(classify_processing_level(""), MinimamenteProcesado);
    }

    #[test]
    fn test_dictionary_beats_keywords() {
        // "nuggets" outranks both "pollo" and the "natural" keyword
        assert_eq!(classify_processing_level("nuggets de pollo natural"), UltraProcesado);
    }

    #[test]
    fn test_food_groups() {
        assert_eq!(classify_food_group("Manzana"), FoodGroup::Frutas);
        assert_eq!(classify_food_group("pollo"), FoodGroup::Proteinas);
        assert_eq!(classify_food_group("arroz integral"), FoodGroup::Cereales);
        assert_eq!(classify_food_group("leche"), FoodGroup::Lacteos);
        assert_eq!(classify_food_group("aceite de oliva"), FoodGroup::Grasas);
        assert_eq!(classify_food_group("brócoli"), FoodGroup::Verduras);
    }

    #[test]
    fn test_group_compound_overrides() {
        assert_eq!(classify_food_group("frutos secos"), FoodGroup::Grasas);
        assert_eq!(classify_food_group("yogur de fresa"), FoodGroup::Lacteos);
    }

    #[test]
    fn test_group_default() {
        assert_eq!(classify_food_group("galletas"), FoodGroup::Otros);
        assert_eq!(classify_food_group(""), FoodGroup::Otros);
    }

    #[test]
    fn test_rule_patterns_are_lowercase() {
        for (pattern, _) in PROCESSING_RULES {
            assert_eq!(*pattern, pattern.to_lowercase());
        }
        for (pattern, _) in FOOD_GROUP_RULES {
            assert_eq!(*pattern, pattern.to_lowercase());
        }
    }
}
