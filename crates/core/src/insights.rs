use crate::{EffectivenessEntry, FrequencyEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insights {
    pub top_sums: Vec<FrequencyEntry>,
    pub top_scoopers: Vec<EffectivenessEntry>,
    pub total_combinations: usize,
}

/// Most frequent sums, highest first. Stable sort on a copy: ties keep the
/// ascending-value order of the input, which is never mutated.
pub fn top_sums(entries: &[FrequencyEntry], limit: usize) -> Vec<FrequencyEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(limit);
    ranked
}

/// Most versatile Scooper values, highest combination count first; ties keep
/// the spec order of the input.
pub fn top_scoopers(entries: &[EffectivenessEntry], limit: usize) -> Vec<EffectivenessEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.combinations.cmp(&a.combinations));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(value: i64, frequency: u32) -> FrequencyEntry {
        FrequencyEntry {
            value,
            frequency,
            is_valid_scooper: false,
        }
    }

    #[test]
    fn top_sums_breaks_ties_by_input_order() {
        let entries = vec![freq(2, 4), freq(3, 7), freq(5, 4), freq(8, 1)];
        let ranked = top_sums(&entries, 3);
        let values: Vec<i64> = ranked.iter().map(|entry| entry.value).collect();
        assert_eq!(values, vec![3, 2, 5]);
        // The canonical ordering stays untouched.
        let original: Vec<i64> = entries.iter().map(|entry| entry.value).collect();
        assert_eq!(original, vec![2, 3, 5, 8]);
    }

    #[test]
    fn top_scoopers_truncates_to_limit() {
        let entries: Vec<EffectivenessEntry> = (0..5)
            .map(|i| EffectivenessEntry {
                value: i,
                count: 1,
                combinations: i as u32,
                probability: 0.0,
            })
            .collect();
        let ranked = top_scoopers(&entries, 2);
        let values: Vec<i64> = ranked.iter().map(|entry| entry.value).collect();
        assert_eq!(values, vec![4, 3]);
    }
}
