use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::insights::classifier::classify_food_group;
use crate::insights::constants::*;
use crate::models::{Diet, FoodGroup, FoodGroupShare, VarietyInsight};

/// Unique lower-cased food names per group.
///
/// Meals without itemized foods contribute their own name as a pseudo-food.
pub fn unique_foods_by_group(diet: &Diet) -> HashMap<FoodGroup, HashSet<String>> {
    let mut groups: HashMap<FoodGroup, HashSet<String>> = HashMap::new();
    for meal in &diet.meals {
        for (_, name) in meal.food_entries() {
            groups
                .entry(classify_food_group(name))
                .or_default()
                .insert(name.to_lowercase());
        }
    }
    groups
}

/// Whether a group holds enough distinct foods.
///
/// `Otros` only needs to be present at all.
pub fn is_group_recommended(group: FoodGroup, count: usize) -> bool {
    match group {
        FoodGroup::Otros => count > 0,
        _ => count >= MIN_FOODS_PER_GROUP,
    }
}

/// Score a diet's nutritional variety.
pub fn analyze_variety(diet: &Diet) -> VarietyInsight {
    let unique = unique_foods_by_group(diet);
    let count_of = |group: FoodGroup| unique.get(&group).map_or(0, HashSet::len);

    // Each name maps to exactly one group, so the union is the sum.
    let total_unique_foods: usize = unique.values().map(HashSet::len).sum();

    let groups: Vec<FoodGroupShare> = FoodGroup::ALL
        .iter()
        .map(|&group| {
            let count = count_of(group);
            FoodGroupShare {
                group,
                count,
                percentage: round2(clamp_score(percent_of(
                    count as f64,
                    total_unique_foods as f64,
                ))),
                recommended: is_group_recommended(group, count),
            }
        })
        .collect();

    let recommended_groups = groups.iter().filter(|g| g.recommended).count();
    let variety_score = round2(clamp_score(
        recommended_groups as f64 / IDEAL_GROUP_COUNT * 100.0,
    ));

    let mut recommendations = Vec::new();
    if recommended_groups < MIN_RECOMMENDED_GROUPS {
        recommendations.push(format!(
            "Solo {} grupos alimentarios tienen variedad suficiente. \
             Introduce alimentos de más grupos para equilibrar la dieta.",
            recommended_groups
        ));
    }
    if count_of(FoodGroup::Frutas) == 0 {
        recommendations
            .push("Añade fruta fresca a la dieta, al menos 2 o 3 piezas al día.".to_string());
    }
    if count_of(FoodGroup::Verduras) == 0 {
        recommendations.push("Incluye verduras en las comidas principales.".to_string());
    }
    if total_unique_foods < MIN_UNIQUE_FOODS {
        recommendations.push(format!(
            "El plan solo incluye {} alimentos distintos. Intenta llegar a {} o más.",
            total_unique_foods, MIN_UNIQUE_FOODS
        ));
    }

    debug!(
        diet_id = %diet.id,
        total_unique_foods,
        recommended_groups,
        variety_score,
        "variety analysis complete"
    );

    VarietyInsight {
        groups,
        total_unique_foods,
        variety_score,
        recommendations,
    }
}
