use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::insights::generate_insights;
use crate::models::{Diet, Insights};

/// Keyed store of computed insights: diet id → insights.
///
/// The engine itself never caches. Callers that want reuse own one of these
/// and decide when to invalidate.
#[derive(Debug, Default)]
pub struct InsightsCache {
    entries: HashMap<String, Insights>,
}

impl InsightsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, diet_id: &str) -> Option<&Insights> {
        self.entries.get(diet_id)
    }

    /// Generation time of the cached entry, if any.
    pub fn generated_at(&self, diet_id: &str) -> Option<DateTime<Utc>> {
        self.entries.get(diet_id).map(|i| i.generated_at)
    }

    /// Cached insights for the diet, computing and storing them on a miss.
    pub fn get_or_compute(&mut self, diet: &Diet) -> &Insights {
        self.entries
            .entry(diet.id.clone())
            .or_insert_with(|| generate_insights(diet))
    }

    /// Replace the cached entry with a fresh computation.
    pub fn refresh(&mut self, diet: &Diet) -> &Insights {
        self.entries.insert(diet.id.clone(), generate_insights(diet));
        &self.entries[&diet.id]
    }

    /// Drop the entry for a diet. Returns whether one existed.
    pub fn invalidate(&mut self, diet_id: &str) -> bool {
        self.entries.remove(diet_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
