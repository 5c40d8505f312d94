use crate::{Multiset, SumEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub value: i64,
    pub frequency: u32,
    #[serde(default)]
    pub is_valid_scooper: bool,
}

/// Group pair sums by value, ascending. Frequencies across all entries add
/// up to the number of pairs; the scooper flag starts out unset.
pub fn aggregate_frequencies(sums: &[SumEntry]) -> Vec<FrequencyEntry> {
    let mut by_value: BTreeMap<i64, u32> = BTreeMap::new();
    for entry in sums {
        *by_value.entry(entry.sum).or_insert(0) += 1;
    }
    by_value
        .into_iter()
        .map(|(value, frequency)| FrequencyEntry {
            value,
            frequency,
            is_valid_scooper: false,
        })
        .collect()
}

/// Flag every entry whose value occurs in the Scooper multiset.
pub fn mark_scooper_values(entries: &mut [FrequencyEntry], scoopers: &Multiset) {
    for entry in entries {
        entry.is_valid_scooper = scoopers.contains(entry.value);
    }
}
