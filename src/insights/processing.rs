use tracing::debug;

use crate::insights::classifier::classify_processing_level;
use crate::insights::constants::*;
use crate::models::{Diet, LevelShare, ProcessedFood, ProcessingInsight, ProcessingLevel};

/// Classify every food occurrence in the diet, meal-name fallback included.
///
/// Occurrences are not deduplicated: a food eaten twice weighs twice.
pub fn classify_occurrences(diet: &Diet) -> Vec<(String, String, ProcessingLevel)> {
    diet.meals
        .iter()
        .flat_map(|meal| meal.food_entries())
        .map(|(id, name)| (id.to_string(), name.to_string(), classify_processing_level(name)))
        .collect()
}

/// Score a diet's degree of food processing.
pub fn analyze_processing(diet: &Diet) -> ProcessingInsight {
    let occurrences = classify_occurrences(diet);
    let total = occurrences.len() as f64;
    let share_of_diet = round2(percent_of(1.0, total));

    let mut raw_percentages = Vec::with_capacity(ProcessingLevel::ALL.len());
    let distribution: Vec<LevelShare> = ProcessingLevel::ALL
        .iter()
        .map(|&level| {
            let foods: Vec<ProcessedFood> = occurrences
                .iter()
                .filter(|(_, _, l)| *l == level)
                .map(|(id, name, _)| ProcessedFood {
                    food_id: id.clone(),
                    name: name.clone(),
                    level,
                    share_of_diet,
                })
                .collect();
            let percentage = clamp_score(percent_of(foods.len() as f64, total));
            raw_percentages.push((level, percentage));
            LevelShare {
                level,
                percentage: round2(percentage),
                foods,
            }
        })
        .collect();

    let pct = |level: ProcessingLevel| {
        raw_percentages
            .iter()
            .find(|(l, _)| *l == level)
            .map_or(0.0, |(_, p)| *p)
    };

    let processing_score: f64 = raw_percentages
        .iter()
        .map(|(level, percentage)| percentage / 100.0 * level_weight(*level))
        .sum();
    let processing_score = round2(clamp_score(processing_score));

    // Thresholds apply to the reported (rounded) percentages.
    let ultra_pct = round2(pct(ProcessingLevel::UltraProcesado));
    let unprocessed_pct = round2(pct(ProcessingLevel::SinProcesar));

    let mut recommendations = Vec::new();
    if ultra_pct > ULTRA_PROCESSED_STRONG_PCT {
        recommendations.push(format!(
            "El {:.0}% de los alimentos son ultra-procesados. \
             Reduce de forma prioritaria bollería, snacks y precocinados.",
            ultra_pct
        ));
    } else if ultra_pct > ULTRA_PROCESSED_MODERATE_PCT {
        recommendations.push(format!(
            "El {:.0}% de los alimentos son ultra-procesados. \
             Sustituye algunos por alternativas caseras o frescas.",
            ultra_pct
        ));
    }
    if unprocessed_pct < MIN_UNPROCESSED_PCT {
        recommendations.push(format!(
            "Solo el {:.0}% de los alimentos son frescos o sin procesar. \
             Aumenta la proporción de fruta, verdura y producto fresco.",
            unprocessed_pct
        ));
    }

    let ultra_processed_foods = distribution
        .iter()
        .find(|share| share.level == ProcessingLevel::UltraProcesado)
        .map(|share| share.foods.clone())
        .unwrap_or_default();

    debug!(
        diet_id = %diet.id,
        occurrences = occurrences.len(),
        ultra_pct,
        processing_score,
        "processing analysis complete"
    );

    ProcessingInsight {
        distribution,
        processing_score,
        recommendations,
        ultra_processed_foods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, Meal, MealType};

    fn diet_with_foods(names: &[&str]) -> Diet {
        let foods = names
            .iter()
            .enumerate()
            .map(|(i, n)| FoodItem::new(format!("f{}", i), *n))
            .collect();
        Diet::new(
            "d1",
            "c1",
            vec![Meal::new("m1", "Comida", MealType::Almuerzo, 700.0).with_foods(foods)],
        )
    }

    #[test]
    fn test_all_unprocessed_scores_100() {
        let insight = analyze_processing(&diet_with_foods(&["manzana", "pollo", "brócoli"]));
        assert_eq!(insight.processing_score, 100.0);
        assert!(insight.recommendations.is_empty());
        assert!(insight.ultra_processed_foods.is_empty());
    }

    #[test]
    fn test_weighted_score() {
        // one of each level: (100 + 75 + 50 + 0) / 4
        let insight =
            analyze_processing(&diet_with_foods(&["manzana", "arroz", "queso", "galletas"]));
        assert_eq!(insight.processing_score, 56.25);
        for share in &insight.distribution {
            assert_eq!(share.percentage, 25.0);
            assert_eq!(share.foods.len(), 1);
        }
    }

    #[test]
    fn test_moderate_ultra_warning() {
        let mut names = vec!["manzana"; 7];
        names.push("galletas");
        let insight = analyze_processing(&diet_with_foods(&names));
        // 12.5% ultra-processed
        assert_eq!(insight.percentage_of(ProcessingLevel::UltraProcesado), 12.5);
        assert_eq!(insight.recommendations.len(), 1);
        assert!(insight.recommendations[0].contains("Sustituye"));
    }

    #[test]
    fn test_ultra_at_exactly_20_percent_is_moderate() {
        let insight = analyze_processing(&diet_with_foods(&[
            "galletas", "manzana", "manzana", "manzana", "manzana",
        ]));
        assert_eq!(insight.percentage_of(ProcessingLevel::UltraProcesado), 20.0);
        assert_eq!(insight.recommendations.len(), 1);
        assert!(insight.recommendations[0].contains("Sustituye"));
    }

    #[test]
    fn test_ultra_at_exactly_10_percent_no_warning() {
        let mut names = vec!["manzana"; 9];
        names.push("galletas");
        let insight = analyze_processing(&diet_with_foods(&names));
        assert_eq!(insight.percentage_of(ProcessingLevel::UltraProcesado), 10.0);
        assert!(insight.recommendations.is_empty());
    }

    #[test]
    fn test_fresh_share_at_exactly_30_percent_no_suggestion() {
        let mut names = vec!["manzana"; 3];
        names.extend(["arroz"; 7]);
        let insight = analyze_processing(&diet_with_foods(&names));
        assert_eq!(insight.percentage_of(ProcessingLevel::SinProcesar), 30.0);
        assert!(insight.recommendations.is_empty());
    }

    #[test]
    fn test_occurrences_not_deduplicated() {
        let insight = analyze_processing(&diet_with_foods(&["galletas", "galletas", "pollo"]));
        assert_eq!(insight.ultra_processed_foods.len(), 2);
        assert_eq!(insight.ultra_processed_foods[0].share_of_diet, 33.33);
    }

    #[test]
    fn test_meal_name_fallback() {
        let diet = Diet::new(
            "d1",
            "c1",
            vec![Meal::new("m9", "Pizza congelada", MealType::Cena, 900.0)],
        );
        let insight = analyze_processing(&diet);
        assert_eq!(insight.ultra_processed_foods.len(), 1);
        assert_eq!(insight.ultra_processed_foods[0].food_id, "m9");
        assert_eq!(insight.processing_score, 0.0);
    }

    #[test]
    fn test_empty_diet() {
        let insight = analyze_processing(&Diet::new("d1", "c1", Vec::new()));
        assert_eq!(insight.processing_score, 0.0);
        assert_eq!(insight.distribution.len(), 4);
    }
}
