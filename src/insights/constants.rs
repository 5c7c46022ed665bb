use crate::models::ProcessingLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Cost
// ─────────────────────────────────────────────────────────────────────────────

/// Reference daily cost of an average plan, in currency units.
pub const MARKET_DAILY_BENCHMARK: f64 = 10.0;

/// Fallback unit cost per 100 kcal for meals without explicit costs.
pub const FALLBACK_COST_PER_100_KCAL: f64 = 0.10;

/// Above benchmark × this factor the plan is considered expensive.
pub const EXPENSIVE_FACTOR: f64 = 1.2;

/// Below benchmark × this factor the plan is considered suspiciously cheap.
pub const CHEAP_FACTOR: f64 = 0.8;

/// A meal type costing more than this multiple of the per-meal average is flagged.
pub const MEAL_TYPE_OUTLIER_FACTOR: f64 = 1.5;

pub const DAYS_PER_WEEK: f64 = 7.0;
pub const DAYS_PER_MONTH: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Variety
// ─────────────────────────────────────────────────────────────────────────────

/// Unique foods a group needs to count as sufficiently varied.
pub const MIN_FOODS_PER_GROUP: usize = 3;

/// Number of recommended groups that yields a perfect variety score.
pub const IDEAL_GROUP_COUNT: f64 = 6.0;

/// Fewer recommended groups than this triggers the general variety warning.
pub const MIN_RECOMMENDED_GROUPS: usize = 4;

/// Fewer unique foods than this triggers the absolute-variety warning.
pub const MIN_UNIQUE_FOODS: usize = 15;

// ─────────────────────────────────────────────────────────────────────────────
// Processing
// ─────────────────────────────────────────────────────────────────────────────

pub const ULTRA_PROCESSED_STRONG_PCT: f64 = 20.0;
pub const ULTRA_PROCESSED_MODERATE_PCT: f64 = 10.0;
pub const MIN_UNPROCESSED_PCT: f64 = 30.0;

/// Score contributed by a level (higher = less processed).
pub fn level_weight(level: ProcessingLevel) -> f64 {
    match level {
        ProcessingLevel::SinProcesar => 100.0,
        ProcessingLevel::MinimamenteProcesado => 75.0,
        ProcessingLevel::Procesado => 50.0,
        ProcessingLevel::UltraProcesado => 0.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overall score
// ─────────────────────────────────────────────────────────────────────────────

/// Daily cost up to which the cost component scores a full 100.
///
/// Deliberately separate from `MARKET_DAILY_BENCHMARK`.
pub const QUALITY_COST_CUTOFF: f64 = 12.0;

/// Points lost per currency unit above `QUALITY_COST_CUTOFF`.
pub const COST_PENALTY_PER_UNIT: f64 = 5.0;

pub const COST_WEIGHT: f64 = 0.3;
pub const VARIETY_WEIGHT: f64 = 0.4;
pub const PROCESSING_WEIGHT: f64 = 0.3;

/// Maximum number of prioritized recommendations.
pub const MAX_PRIORITIZED_RECOMMENDATIONS: usize = 5;

/// Round to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a score or percentage into [0, 100].
#[inline]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// `part / total × 100`, or 0 when `total` is zero.
#[inline]
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
