use tracing::debug;

use crate::insights::constants::*;
use crate::models::{CostInsight, Diet, MarketComparison, Meal, MealType, MealTypeCost};

/// Cost of a single meal.
///
/// Explicit item costs win; a meal without any falls back to
/// `calories / 100 × FALLBACK_COST_PER_100_KCAL`.
pub fn meal_cost(meal: &Meal) -> f64 {
    meal.explicit_cost()
        .unwrap_or_else(|| meal.calories / 100.0 * FALLBACK_COST_PER_100_KCAL)
}

/// Aggregate cost per meal type, in first-appearance order.
fn costs_by_meal_type(diet: &Diet) -> Vec<(MealType, f64)> {
    let mut totals: Vec<(MealType, f64)> = Vec::new();
    for meal in &diet.meals {
        let cost = meal_cost(meal);
        match totals.iter_mut().find(|(t, _)| *t == meal.meal_type) {
            Some((_, total)) => *total += cost,
            None => totals.push((meal.meal_type, cost)),
        }
    }
    totals
}

/// Score a diet's monetary cost.
///
/// `cost_per_day` is the sum over every meal in the diet, i.e. the meal
/// sequence is taken to be one day.
pub fn analyze_cost(diet: &Diet) -> CostInsight {
    // Round once so every threshold sees the figure the record reports.
    let by_type: Vec<(MealType, f64)> = costs_by_meal_type(diet)
        .into_iter()
        .map(|(meal_type, cost)| (meal_type, round2(cost)))
        .collect();
    let cost_per_day = round2(by_type.iter().map(|(_, cost)| cost).sum());
    let cost_per_meal = if diet.meals.is_empty() {
        0.0
    } else {
        round2(cost_per_day / diet.meals.len() as f64)
    };

    let difference = round2(cost_per_day - MARKET_DAILY_BENCHMARK);
    let percent_difference = round2(difference / MARKET_DAILY_BENCHMARK * 100.0);

    let mut recommendations = Vec::new();
    if cost_per_day > MARKET_DAILY_BENCHMARK * EXPENSIVE_FACTOR {
        recommendations.push(format!(
            "El coste diario ({:.2} €) supera en un {:.0}% la media del mercado. \
             Considera proteínas más económicas (legumbres, huevos) y productos de temporada.",
            cost_per_day, percent_difference
        ));
    } else if cost_per_day < MARKET_DAILY_BENCHMARK * CHEAP_FACTOR {
        recommendations.push(format!(
            "El coste diario ({:.2} €) está muy por debajo de la media del mercado. \
             Verifica que se mantiene la calidad nutricional.",
            cost_per_day
        ));
    }

    let outlier_limit = round2(cost_per_meal * MEAL_TYPE_OUTLIER_FACTOR);
    for (meal_type, cost) in &by_type {
        if *cost > outlier_limit {
            recommendations.push(format!(
                "Las comidas de tipo '{}' concentran un coste elevado ({:.2} €). \
                 Revisa sus ingredientes para abaratarlas.",
                meal_type, cost
            ));
        }
    }

    let by_meal_type = by_type
        .iter()
        .map(|(meal_type, cost)| MealTypeCost {
            meal_type: *meal_type,
            cost: *cost,
            percentage: round2(clamp_score(percent_of(*cost, cost_per_day))),
        })
        .collect();

    debug!(
        diet_id = %diet.id,
        meals = diet.meals.len(),
        cost_per_day,
        percent_difference,
        "cost analysis complete"
    );

    CostInsight {
        cost_per_day,
        cost_per_week: round2(cost_per_day * DAYS_PER_WEEK),
        cost_per_month: round2(cost_per_day * DAYS_PER_MONTH),
        cost_per_meal,
        by_meal_type,
        market_comparison: MarketComparison {
            benchmark: MARKET_DAILY_BENCHMARK,
            difference,
            percent_difference,
        },
        recommendations,
    }
}
