use crate::{Multiset, SumEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectivenessEntry {
    pub value: i64,
    pub count: u32,
    pub combinations: u32,
    pub probability: f64,
}

/// Score every distinct Scooper group, in spec order, carrying the group's
/// count. Probability is the share of all pairs whose sum hits the target
/// value, defined as 0 when there are no pairs at all.
pub fn evaluate_effectiveness(targets: &Multiset, sums: &[SumEntry]) -> Vec<EffectivenessEntry> {
    let total = sums.len();
    let mut by_sum: HashMap<i64, u32> = HashMap::new();
    for entry in sums {
        *by_sum.entry(entry.sum).or_insert(0) += 1;
    }
    targets
        .groups()
        .iter()
        .map(|group| {
            let combinations = by_sum.get(&group.value).copied().unwrap_or(0);
            let probability = if total == 0 {
                0.0
            } else {
                f64::from(combinations) / total as f64
            };
            EffectivenessEntry {
                value: group.value,
                count: group.count,
                combinations,
                probability,
            }
        })
        .collect()
}
