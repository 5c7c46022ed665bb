use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::insights::generate_insights;
use crate::models::{Diet, Insights};

/// Minimum Jaro-Winkler similarity for a fuzzy id suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Read-only store of diet snapshots, keyed by id.
///
/// This is the collaborator that resolves diets; an unknown id is the only
/// "not found" condition and surfaces as `None`.
pub struct DietStore {
    diets: HashMap<String, Diet>,
    /// Ids in load order, for stable listing.
    order: Vec<String>,
}

impl DietStore {
    /// Create a store from a list of diets. Later duplicates replace earlier ones.
    pub fn new(diets: Vec<Diet>) -> Self {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for diet in diets {
            if !map.contains_key(&diet.id) {
                order.push(diet.id.clone());
            }
            map.insert(diet.id.clone(), diet);
        }
        Self { diets: map, order }
    }

    pub fn get_diet(&self, id: &str) -> Option<&Diet> {
        self.diets.get(id)
    }

    /// All diets in load order.
    pub fn all_diets(&self) -> Vec<&Diet> {
        self.order.iter().filter_map(|id| self.diets.get(id)).collect()
    }

    /// Diets owned by a client, in load order.
    pub fn diets_for_client(&self, client_id: &str) -> Vec<&Diet> {
        self.all_diets()
            .into_iter()
            .filter(|d| d.client_id == client_id)
            .collect()
    }

    /// Insights for a diet, or `None` if the id does not resolve.
    pub fn insights_for(&self, id: &str) -> Option<Insights> {
        self.get_diet(id).map(generate_insights)
    }

    /// Ids resembling `query` (by id or by name), best match first.
    pub fn suggest_ids(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        let mut candidates: Vec<(&Diet, f64)> = self
            .all_diets()
            .into_iter()
            .map(|d| {
                let by_id = jaro_winkler(&d.id.to_lowercase(), &query);
                let by_name = jaro_winkler(&d.label().to_lowercase(), &query);
                (d, by_id.max(by_name))
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(d, _)| d.id.clone()).collect()
    }

    /// Count of diets in the store.
    pub fn len(&self) -> usize {
        self.diets.len()
    }

    /// Check if the store has no diets.
    pub fn is_empty(&self) -> bool {
        self.diets.is_empty()
    }
}
