use diet_insights_rs::insights::{classify_food_group, classify_processing_level};
use diet_insights_rs::models::{FoodGroup, ProcessingLevel};

#[test]
fn test_classifiers_are_total() {
    let inputs = [
        "",
        " ",
        "???",
        "ÁRBOL",
        "1234",
        "comida sin nombre",
        "日本の料理",
        "queso procesado con galletas",
    ];
    for input in inputs {
        let level = classify_processing_level(input);
        assert!(ProcessingLevel::ALL.contains(&level));
        let group = classify_food_group(input);
        assert!(FoodGroup::ALL.contains(&group));
    }
}

#[test]
fn test_classifiers_are_deterministic() {
    for name in ["Galletas María", "pollo al horno", "Zumo de naranja", ""] {
        assert_eq!(classify_processing_level(name), classify_processing_level(name));
        assert_eq!(classify_food_group(name), classify_food_group(name));
    }
}

#[test]
fn test_case_insensitive() {
    assert_eq!(
        classify_processing_level("BOLLERÍA"),
        ProcessingLevel::UltraProcesado
    );
    assert_eq!(classify_food_group("PLÁTANO"), FoodGroup::Frutas);
}

#[test]
fn test_processed_cheese_before_cheese() {
    assert_eq!(
        classify_processing_level("queso procesado en lonchas"),
        ProcessingLevel::UltraProcesado
    );
    assert_eq!(
        classify_processing_level("queso fresco"),
        ProcessingLevel::Procesado
    );
}

#[test]
fn test_scenario_foods() {
    for name in ["galletas", "bollería", "snacks"] {
        assert_eq!(classify_processing_level(name), ProcessingLevel::UltraProcesado);
    }
    assert_eq!(classify_food_group("manzana"), FoodGroup::Frutas);
    assert_eq!(classify_food_group("pollo"), FoodGroup::Proteinas);
    assert_eq!(classify_food_group("arroz"), FoodGroup::Cereales);
}

#[test]
fn test_packaged_juice_is_not_fresh_fruit() {
    assert_eq!(
        classify_processing_level("zumo de naranja"),
        ProcessingLevel::Procesado
    );
    assert_eq!(classify_processing_level("naranja"), ProcessingLevel::SinProcesar);
}
