use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardGroup {
    pub value: i64,
    pub count: u32,
}

/// Ordered value -> count mapping. Repeated additions accumulate into the
/// existing group; first-appearance order is preserved for display and for
/// effectiveness iteration.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Multiset {
    groups: Vec<CardGroup>,
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: i64, count: u32) {
        if count == 0 {
            return;
        }
        if let Some(group) = self.groups.iter_mut().find(|group| group.value == value) {
            group.count += count;
        } else {
            self.groups.push(CardGroup { value, count });
        }
    }

    pub fn count_of(&self, value: i64) -> u32 {
        self.groups
            .iter()
            .find(|group| group.value == value)
            .map(|group| group.count)
            .unwrap_or(0)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.groups.iter().any(|group| group.value == value)
    }

    pub fn groups(&self) -> &[CardGroup] {
        &self.groups
    }

    /// Number of physical cards, i.e. the sum of all group counts.
    pub fn total_cards(&self) -> u32 {
        self.groups.iter().map(|group| group.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_and_preserves_first_appearance() {
        let mut cards = Multiset::new();
        cards.add(3, 1);
        cards.add(1, 2);
        cards.add(3, 2);
        let groups: Vec<(i64, u32)> = cards
            .groups()
            .iter()
            .map(|group| (group.value, group.count))
            .collect();
        assert_eq!(groups, vec![(3, 3), (1, 2)]);
        assert_eq!(cards.total_cards(), 5);
        assert_eq!(cards.count_of(3), 3);
        assert_eq!(cards.count_of(7), 0);
        assert!(cards.contains(1));
        assert!(!cards.contains(2));
    }

    #[test]
    fn zero_count_adds_nothing() {
        let mut cards = Multiset::new();
        cards.add(4, 0);
        assert!(cards.is_empty());
    }
}
