use std::io::Write;

use tempfile::NamedTempFile;

use diet_insights_rs::models::Insights;
use diet_insights_rs::state::{load_diets, save_insights, DietStore, InsightsCache};

const DIETS_JSON: &str = r#"[
    {
        "id": "plan-definicion",
        "clientId": "ana",
        "name": "Definición",
        "meals": [
            {"id": "m1", "name": "Desayuno", "mealType": "breakfast", "calories": 350,
             "foods": [{"id": "f1", "name": "Avena"}, {"id": "f2", "name": "Fresas"}]},
            {"id": "m2", "name": "Comida", "mealType": "lunch", "calories": 700,
             "foods": [{"id": "f3", "name": "Pollo", "cost": 2.8}, {"id": "f4", "name": "Arroz", "cost": 0.3}]},
            {"id": "m3", "name": "Pizza congelada", "mealType": "dinner"}
        ]
    },
    {
        "id": "plan-volumen",
        "clientId": "luis",
        "meals": []
    }
]"#;

fn diets_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DIETS_JSON.as_bytes()).unwrap();
    file
}

#[test]
fn test_store_resolves_and_reports_not_found() {
    let file = diets_file();
    let store = DietStore::new(load_diets(file.path()).unwrap());

    assert_eq!(store.len(), 2);
    assert_eq!(store.diets_for_client("ana").len(), 1);
    assert!(store.insights_for("plan-inexistente").is_none());

    let insights = store.insights_for("plan-definicion").unwrap();
    // 0.35 fallback + 3.1 explicit + 0 for the calorie-less dinner
    assert_eq!(insights.cost.cost_per_day, 3.45);
    assert_eq!(insights.processing.ultra_processed_foods.len(), 1);
    assert_eq!(insights.processing.ultra_processed_foods[0].name, "Pizza congelada");
}

#[test]
fn test_cache_and_saved_insights_agree() {
    let file = diets_file();
    let store = DietStore::new(load_diets(file.path()).unwrap());
    let diet = store.get_diet("plan-definicion").unwrap();

    let mut cache = InsightsCache::new();
    let cached = cache.get_or_compute(diet).clone();

    let out = NamedTempFile::new().unwrap();
    save_insights(out.path(), &cached).unwrap();
    let content = std::fs::read_to_string(out.path()).unwrap();
    let reloaded: Insights = serde_json::from_str(&content).unwrap();

    assert_eq!(reloaded.diet_id, cached.diet_id);
    assert_eq!(reloaded.overall_score, cached.overall_score);
    assert_eq!(reloaded.prioritized_recommendations, cached.prioritized_recommendations);
    assert_eq!(reloaded.generated_at, cached.generated_at);
    assert_eq!(cache.generated_at("plan-definicion"), Some(cached.generated_at));
}
