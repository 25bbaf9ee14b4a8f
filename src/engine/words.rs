//! Word normalization, filtering, and placement ordering
//!
//! Raw input words are uppercased and stripped of separator characters;
//! anything that still falls outside the alphabet or the length bounds is
//! dropped silently. Generation never fails merely because some inputs
//! don't fit, only when nothing survives.

use std::collections::HashSet;

use crate::io::configuration::{MIN_WORD_LEN, SIZE_RATIO};

/// Longest word length accepted for a grid edge
///
/// The ratio bound keeps words short enough to leave the planner room to
/// maneuver; the configured cap applies on top of it.
pub fn length_limit(size: usize, max_word_len: usize) -> usize {
    let (num, den) = SIZE_RATIO;
    max_word_len.min(size * num / den)
}

/// Normalize one raw word to its candidate form
///
/// Uppercases and strips ASCII whitespace and hyphens (separators in
/// multi-word entries). Returns `None` if any other non-alphabet character
/// remains, leaving the word to be dropped.
fn normalize(raw: &str) -> Option<String> {
    let mut word = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_whitespace() || ch == '-' {
            continue;
        }
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        word.push(upper);
    }
    Some(word)
}

/// Filter and order raw words into placement candidates
///
/// Output words are unique after case-insensitive normalization and satisfy
/// the length bounds for the grid. Candidates are ordered by descending
/// length, stable on ties, because longer words are statistically harder to
/// fit and benefit from an emptier grid.
pub fn candidates(raw_words: &[String], size: usize, max_word_len: usize) -> Vec<String> {
    let limit = length_limit(size, max_word_len);
    let mut seen: HashSet<String> = HashSet::new();
    let mut accepted: Vec<String> = Vec::with_capacity(raw_words.len());

    for raw in raw_words {
        let Some(word) = normalize(raw) else {
            log::debug!("dropping '{raw}': contains non-alphabet characters");
            continue;
        };
        if word.len() < MIN_WORD_LEN || word.len() > limit {
            log::debug!(
                "dropping '{raw}': length {} outside [{MIN_WORD_LEN}, {limit}]",
                word.len()
            );
            continue;
        }
        if !seen.insert(word.clone()) {
            continue;
        }
        accepted.push(word);
    }

    // Stable sort preserves input order among equal lengths
    accepted.sort_by_key(|word| std::cmp::Reverse(word.len()));
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_uppercases_and_strips_separators() {
        let result = candidates(&raw(&["sea horse", "ice-cream"]), 15, 15);
        assert_eq!(result, vec!["SEAHORSE", "ICECREAM"]);
    }

    #[test]
    fn test_drops_non_alphabet_words() {
        let result = candidates(&raw(&["caf\u{e9}", "r2d2", "valid"]), 10, 15);
        assert_eq!(result, vec!["VALID"]);
    }

    #[test]
    fn test_length_bounds() {
        // size 10 gives a ratio limit of 6
        assert_eq!(length_limit(10, 15), 6);
        let result = candidates(&raw(&["a", "ab", "abcdef", "abcdefg"]), 10, 15);
        assert_eq!(result, vec!["ABCDEF", "AB"]);
    }

    #[test]
    fn test_configured_cap_applies_below_ratio() {
        assert_eq!(length_limit(30, 8), 8);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first() {
        let result = candidates(&raw(&["Cat", "dog", "CAT", "DOG", "cat"]), 10, 15);
        assert_eq!(result, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_descending_length_stable_on_ties() {
        let result = candidates(&raw(&["bee", "onyx", "cat", "lion"]), 12, 15);
        assert_eq!(result, vec!["ONYX", "LION", "BEE", "CAT"]);
    }

    #[test]
    fn test_everything_filtered_yields_empty() {
        let result = candidates(&raw(&["x", "123", "waytoolongforthis"]), 10, 15);
        assert!(result.is_empty());
    }
}
