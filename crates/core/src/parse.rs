use crate::Multiset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostics emitted while parsing a card spec. Warnings never interrupt
/// parsing; they record which tokens were skipped or patched up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("skipped token '{0}': not an integer value")]
    BadValue(String),
    #[error("skipped token '{0}': range bounds must be integers")]
    BadRange(String),
    #[error("token '{0}': multiplier is not a positive integer, using 1")]
    BadMultiplier(String),
}

/// Parse a card spec like `"1 (2), 2, 3-5 (2)"` into a [`Multiset`].
///
/// Total function with a degrade-to-empty contract. Malformed tokens are
/// skipped and unusable multipliers fall back to 1; the worst possible
/// input yields an empty multiset rather than an error. Use
/// [`parse_spec_with_diagnostics`] to observe what was skipped.
pub fn parse_spec(spec: &str) -> Multiset {
    parse_spec_with_diagnostics(spec).0
}

pub fn parse_spec_with_diagnostics(spec: &str) -> (Multiset, Vec<ParseWarning>) {
    let mut cards = Multiset::new();
    let mut warnings = Vec::new();
    for raw in spec.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        parse_token(token, &mut cards, &mut warnings);
    }
    (cards, warnings)
}

fn parse_token(token: &str, cards: &mut Multiset, warnings: &mut Vec<ParseWarning>) {
    let (body, multiplier) = split_multiplier(token);
    let count = parse_multiplier(token, multiplier, warnings);
    let body = body.trim();
    if let Some((start_raw, end_raw)) = body.split_once('-') {
        let (Ok(start), Ok(end)) = (
            start_raw.trim().parse::<i64>(),
            end_raw.trim().parse::<i64>(),
        ) else {
            warnings.push(ParseWarning::BadRange(token.to_string()));
            return;
        };
        // Inverted ranges are defined to contribute nothing.
        for value in start..=end {
            cards.add(value, count);
        }
    } else {
        match body.parse::<i64>() {
            Ok(value) => cards.add(value, count),
            Err(_) => warnings.push(ParseWarning::BadValue(token.to_string())),
        }
    }
}

/// Split a token into the value text and the multiplier text between
/// parentheses. A missing closing paren is tolerated.
fn split_multiplier(token: &str) -> (&str, Option<&str>) {
    match token.split_once('(') {
        Some((body, rest)) => (body, Some(rest.strip_suffix(')').unwrap_or(rest))),
        None => (token, None),
    }
}

fn parse_multiplier(token: &str, raw: Option<&str>, warnings: &mut Vec<ParseWarning>) -> u32 {
    let Some(raw) = raw else {
        return 1;
    };
    match raw.trim().parse::<i64>() {
        Ok(multiplier) if multiplier >= 1 && multiplier <= i64::from(u32::MAX) => multiplier as u32,
        _ => {
            warnings.push(ParseWarning::BadMultiplier(token.to_string()));
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multiplier_with_missing_close_paren() {
        assert_eq!(split_multiplier("4 (2"), ("4 ", Some("2")));
        assert_eq!(split_multiplier("4 (2)"), ("4 ", Some("2")));
        assert_eq!(split_multiplier("4"), ("4", None));
    }

    #[test]
    fn oversized_multiplier_falls_back_to_one() {
        let (cards, warnings) = parse_spec_with_diagnostics("3 (99999999999)");
        assert_eq!(cards.count_of(3), 1);
        assert_eq!(
            warnings,
            vec![ParseWarning::BadMultiplier("3 (99999999999)".to_string())]
        );
    }

    #[test]
    fn zero_multiplier_falls_back_to_one() {
        let cards = parse_spec("2 (0)");
        assert_eq!(cards.count_of(2), 1);
        assert_eq!(cards.total_cards(), 1);
    }
}
