use chrono::{DateTime, Utc};
use tracing::debug;

use crate::insights::constants::*;
use crate::insights::cost::analyze_cost;
use crate::insights::processing::analyze_processing;
use crate::insights::variety::analyze_variety;
use crate::models::{CostInsight, Diet, Insights, ProcessingInsight, VarietyInsight};

/// Quality score for a daily cost.
///
/// Full marks up to `QUALITY_COST_CUTOFF`, then a linear penalty floored at 0.
pub fn cost_component(cost_per_day: f64) -> f64 {
    if cost_per_day <= QUALITY_COST_CUTOFF {
        100.0
    } else {
        (100.0 - (cost_per_day - QUALITY_COST_CUTOFF) * COST_PENALTY_PER_UNIT).max(0.0)
    }
}

/// Weighted combination of the three sub-scores, rounded to an integer.
pub fn overall_score(cost_component: f64, variety_score: f64, processing_score: f64) -> f64 {
    let weighted = cost_component * COST_WEIGHT
        + variety_score * VARIETY_WEIGHT
        + processing_score * PROCESSING_WEIGHT;
    clamp_score(weighted.round())
}

fn summarize(
    cost: &CostInsight,
    variety: &VarietyInsight,
    processing: &ProcessingInsight,
    overall: f64,
) -> String {
    format!(
        "Coste estimado de {:.2} € al día. Variedad nutricional {:.0}/100 y grado de \
         procesamiento {:.0}/100. Puntuación general de salud: {:.0}/100.",
        cost.cost_per_day, variety.variety_score, processing.processing_score, overall
    )
}

/// First recommendations across the three axes, cost first.
///
/// Plain truncation of the concatenated lists, not a relevance ranking.
fn prioritize(
    cost: &CostInsight,
    variety: &VarietyInsight,
    processing: &ProcessingInsight,
) -> Vec<String> {
    let tagged = [
        ("Coste", &cost.recommendations),
        ("Variedad", &variety.recommendations),
        ("Procesamiento", &processing.recommendations),
    ];
    tagged
        .iter()
        .flat_map(|(prefix, recs)| recs.iter().map(move |r| format!("{}: {}", prefix, r)))
        .take(MAX_PRIORITIZED_RECOMMENDATIONS)
        .collect()
}

/// Fold the three sub-insights into one `Insights` record.
pub fn aggregate(
    diet: &Diet,
    cost: CostInsight,
    variety: VarietyInsight,
    processing: ProcessingInsight,
    generated_at: DateTime<Utc>,
) -> Insights {
    let cost_score = cost_component(cost.cost_per_day);
    let overall = overall_score(cost_score, variety.variety_score, processing.processing_score);
    let summary = summarize(&cost, &variety, &processing, overall);
    let prioritized_recommendations = prioritize(&cost, &variety, &processing);

    debug!(
        diet_id = %diet.id,
        cost_score,
        variety_score = variety.variety_score,
        processing_score = processing.processing_score,
        overall,
        "insights aggregated"
    );

    Insights {
        diet_id: diet.id.clone(),
        client_id: diet.client_id.clone(),
        cost,
        variety,
        processing,
        overall_score: overall,
        summary,
        prioritized_recommendations,
        generated_at,
        updated_at: generated_at,
    }
}

/// Compute insights stamped with the given time.
///
/// Deterministic: the same diet and timestamp always yield the same record.
pub fn generate_insights_at(diet: &Diet, generated_at: DateTime<Utc>) -> Insights {
    let cost = analyze_cost(diet);
    let variety = analyze_variety(diet);
    let processing = analyze_processing(diet);
    aggregate(diet, cost, variety, processing, generated_at)
}

/// Compute insights stamped with the current time.
pub fn generate_insights(diet: &Diet) -> Insights {
    generate_insights_at(diet, Utc::now())
}
