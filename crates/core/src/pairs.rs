use crate::Multiset;
use serde::{Deserialize, Serialize};

/// One realized pair outcome: the sum of two distinct card instances, plus
/// the `"a+b"` label the report surfaces display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SumEntry {
    pub sum: i64,
    pub combination: String,
}

/// Materialize one entry per physical card in ascending value order, each
/// value repeated contiguously. Output length equals `cards.total_cards()`.
pub fn expand_instances(cards: &Multiset) -> Vec<i64> {
    let mut groups = cards.groups().to_vec();
    groups.sort_unstable_by_key(|group| group.value);
    let mut instances = Vec::with_capacity(cards.total_cards() as usize);
    for group in groups {
        instances.extend(std::iter::repeat(group.value).take(group.count as usize));
    }
    instances
}

/// Every unordered pair of distinct instances and its sum. Exactly
/// n * (n - 1) / 2 entries; an instance is never paired with itself, but two
/// distinct instances sharing a value do pair.
pub fn generate_pairs(instances: &[i64]) -> Vec<SumEntry> {
    let n = instances.len();
    let mut sums = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            sums.push(SumEntry {
                sum: instances[i] + instances[j],
                combination: format!("{}+{}", instances[i], instances[j]),
            });
        }
    }
    sums
}
