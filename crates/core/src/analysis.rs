use crate::{
    aggregate_frequencies, evaluate_effectiveness, expand_instances, generate_pairs,
    mark_scooper_values, parse_spec_with_diagnostics, top_scoopers, top_sums, EffectivenessEntry,
    FrequencyEntry, Insights, Multiset, ParseWarning, SumEntry,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How many entries each insight list keeps.
    pub insight_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { insight_limit: 3 }
    }
}

/// Everything the pipeline derives from one pair of card specs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    pub scoopees: Multiset,
    pub scoopers: Multiset,
    pub pair_sums: Vec<SumEntry>,
    pub sum_frequency: Vec<FrequencyEntry>,
    pub scooper_effectiveness: Vec<EffectivenessEntry>,
    pub insights: Insights,
    pub scoopee_warnings: Vec<ParseWarning>,
    pub scooper_warnings: Vec<ParseWarning>,
}

impl Analysis {
    pub fn total_combinations(&self) -> usize {
        self.pair_sums.len()
    }
}

/// Run the full pipeline on a pair of card specs. Pure: equal inputs always
/// produce an equal [`Analysis`].
pub fn analyze(scoopee_spec: &str, scooper_spec: &str) -> Analysis {
    analyze_with_options(scoopee_spec, scooper_spec, &AnalysisOptions::default())
}

pub fn analyze_with_options(
    scoopee_spec: &str,
    scooper_spec: &str,
    options: &AnalysisOptions,
) -> Analysis {
    let (scoopees, scoopee_warnings) = parse_spec_with_diagnostics(scoopee_spec);
    let (scoopers, scooper_warnings) = parse_spec_with_diagnostics(scooper_spec);
    let instances = expand_instances(&scoopees);
    let pair_sums = generate_pairs(&instances);
    let mut sum_frequency = aggregate_frequencies(&pair_sums);
    mark_scooper_values(&mut sum_frequency, &scoopers);
    let scooper_effectiveness = evaluate_effectiveness(&scoopers, &pair_sums);
    let insights = Insights {
        top_sums: top_sums(&sum_frequency, options.insight_limit),
        top_scoopers: top_scoopers(&scooper_effectiveness, options.insight_limit),
        total_combinations: pair_sums.len(),
    };
    Analysis {
        scoopees,
        scoopers,
        pair_sums,
        sum_frequency,
        scooper_effectiveness,
        insights,
        scoopee_warnings,
        scooper_warnings,
    }
}

/// Memoizes [`analyze`] per distinct raw input pair, so a host re-rendering
/// with unchanged specs never pays for the quadratic enumeration again.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    options: AnalysisOptions,
    entries: HashMap<(String, String), Arc<Analysis>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            options,
            entries: HashMap::new(),
        }
    }

    pub fn analyze(&mut self, scoopee_spec: &str, scooper_spec: &str) -> Arc<Analysis> {
        let key = (scoopee_spec.to_string(), scooper_spec.to_string());
        if let Some(hit) = self.entries.get(&key) {
            return hit.clone();
        }
        let analysis = Arc::new(analyze_with_options(
            scoopee_spec,
            scooper_spec,
            &self.options,
        ));
        self.entries.insert(key, analysis.clone());
        analysis
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_limit_is_configurable() {
        let analysis =
            analyze_with_options("1-6", "2-12", &AnalysisOptions { insight_limit: 5 });
        assert_eq!(analysis.insights.top_sums.len(), 5);
        assert_eq!(analysis.insights.top_scoopers.len(), 5);
    }

    #[test]
    fn cache_applies_its_options() {
        let mut cache = AnalysisCache::with_options(AnalysisOptions { insight_limit: 1 });
        let analysis = cache.analyze("1-6", "2-12");
        assert_eq!(analysis.insights.top_sums.len(), 1);
        assert_eq!(analysis.insights.top_scoopers.len(), 1);
    }

    #[test]
    fn cache_returns_shared_results_for_repeat_inputs() {
        let mut cache = AnalysisCache::new();
        let first = cache.analyze("1-4", "5 (2)");
        let second = cache.analyze("1-4", "5 (2)");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        let third = cache.analyze("1-4", "6");
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
