//! # Measurement Units Module
//!
//! This module holds the static unit-keyword vocabulary shared by the primary
//! and fallback ingredient parsers. The vocabulary is configuration data: it
//! is initialized once and never mutated, so it is safe to share across
//! threads without locking.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Unit keywords recognized at the head of an ingredient line.
///
/// Matching is case-insensitive and tolerates a trailing "s" on any keyword,
/// so "Cup", "cups" and "tablespoons" all resolve. Size words (small, large,
/// medium) count as units because recipe lines routinely lead with them
/// ("2 large eggs").
pub const UNIT_KEYWORDS: &[&str] = &[
    "tsp",
    "tbsp",
    "tablespoon",
    "teaspoon",
    "cup",
    "cups",
    "oz",
    "ounce",
    "ounces",
    "g",
    "gram",
    "grams",
    "kg",
    "lb",
    "lbs",
    "pound",
    "pounds",
    "ml",
    "milliliter",
    "liter",
    "l",
    "small",
    "large",
    "medium",
    "pinch",
    "dash",
    "clove",
    "cloves",
];

lazy_static! {
    static ref UNIT_SET: HashSet<&'static str> = UNIT_KEYWORDS.iter().copied().collect();
}

/// Check whether a word is a recognized unit keyword.
///
/// # Examples
///
/// ```rust
/// use recipe_import::measurement_units::is_unit_keyword;
///
/// assert!(is_unit_keyword("cup"));
/// assert!(is_unit_keyword("Tablespoons"));
/// assert!(!is_unit_keyword("zucchini"));
/// ```
pub fn is_unit_keyword(word: &str) -> bool {
    let lower = word.to_lowercase();
    if UNIT_SET.contains(lower.as_str()) {
        return true;
    }
    // Optional plural "s"
    lower
        .strip_suffix('s')
        .is_some_and(|singular| UNIT_SET.contains(singular))
}

/// Build a regex alternation fragment matching any unit keyword.
///
/// Keywords are sorted longest-first so the regex engine prefers "tablespoon"
/// over "tbsp"-style prefixes and never stops at a partial match.
pub fn unit_alternation() -> String {
    let mut sorted: Vec<&str> = UNIT_KEYWORDS.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_units() {
        assert!(is_unit_keyword("tsp"));
        assert!(is_unit_keyword("tbsp"));
        assert!(is_unit_keyword("cup"));
        assert!(is_unit_keyword("oz"));
        assert!(is_unit_keyword("g"));
        assert!(is_unit_keyword("ml"));
        assert!(is_unit_keyword("pinch"));
        assert!(is_unit_keyword("clove"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert!(is_unit_keyword("CUP"));
        assert!(is_unit_keyword("Tbsp"));
        assert!(is_unit_keyword("GRAMS"));
    }

    #[test]
    fn test_plural_tolerance() {
        assert!(is_unit_keyword("tablespoons"));
        assert!(is_unit_keyword("pinchs")); // plural rule is a bare trailing "s"
        assert!(is_unit_keyword("kgs"));
    }

    #[test]
    fn test_non_units() {
        assert!(!is_unit_keyword("flour"));
        assert!(!is_unit_keyword("pork"));
        assert!(!is_unit_keyword("zucchinis"));
        assert!(!is_unit_keyword(""));
    }

    #[test]
    fn test_size_words_are_units() {
        assert!(is_unit_keyword("small"));
        assert!(is_unit_keyword("large"));
        assert!(is_unit_keyword("medium"));
    }

    #[test]
    fn test_alternation_longest_first() {
        let alternation = unit_alternation();
        let tablespoon = alternation.find("tablespoon").unwrap();
        let single_g = alternation.find("|g|").unwrap();
        assert!(tablespoon < single_g);
    }
}
