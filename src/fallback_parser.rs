//! # Fallback Parser
//!
//! Deterministic, pattern-based ingredient name extraction. This is the path
//! taken when the primary parser is underconfident or errors out: no scoring,
//! no model, just an ordered sequence of string transforms.
//!
//! ## Pipeline
//!
//! 1. Strip a leading quantity + unit-keyword group (handles dual-unit
//!    notation like "50 g / 1.5 oz")
//! 2. Otherwise strip a bare leading quantity ("2 zucchinis")
//! 3. Truncate at the first comma or open parenthesis
//! 4. Strip leading slash/whitespace remnants
//! 5. Return only the first whitespace token
//!
//! The first-token rule is intentional: "pork cutlets" fallback-parses to
//! "pork". Downstream consumers depend on single-word fallback names.

use crate::measurement_units::unit_alternation;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

lazy_static! {
    /// Leading quantity run, one unit keyword, optional "/"-separated second
    /// quantity + unit group, then mandatory whitespace.
    static ref QUANTITY_UNIT_HEAD: Regex = Regex::new(&format!(
        r"(?i)^[\d/\.\s]*(?:{units})s?(?:\s*/\s*[\d\.\s]*(?:{units})s?)?\s+",
        units = unit_alternation(),
    ))
    .expect("quantity-unit head pattern should be valid");

    /// Bare leading quantity run: digits, slashes, periods, whitespace.
    static ref BARE_QUANTITY_HEAD: Regex =
        Regex::new(r"^[\d/\.\s]+").expect("bare quantity head pattern should be valid");
}

/// Strip a leading quantity + unit group, returning `None` when no unit
/// keyword matched at the head of the string.
fn strip_leading_quantity_unit(text: &str) -> Option<&str> {
    QUANTITY_UNIT_HEAD
        .find(text)
        .map(|matched| &text[matched.end()..])
}

/// Strip a bare leading run of digits/slashes/periods/whitespace.
fn strip_bare_leading_quantity(text: &str) -> &str {
    match BARE_QUANTITY_HEAD.find(text) {
        Some(matched) => &text[matched.end()..],
        None => text,
    }
}

/// Keep only the text before the first comma or open parenthesis, dropping
/// preparation and aside clauses.
fn truncate_at_delimiter(text: &str) -> &str {
    match text.find(|c| c == ',' || c == '(') {
        Some(position) => &text[..position],
        None => text,
    }
}

/// Strip leading slash/whitespace remnants left over from quantity stripping.
fn strip_residual_punctuation(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == '/' || c.is_whitespace())
}

/// Return the first whitespace-separated token, or "" when none remain.
fn take_first_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

/// Extract a best-effort ingredient name using only pattern operations.
///
/// Never panics; empty or whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use recipe_import::fallback_parser::extract_fallback_name;
///
/// assert_eq!(extract_fallback_name("1/2 cup couscous"), "couscous");
/// assert_eq!(extract_fallback_name("50 g / 1.5 oz feta cheese"), "feta");
/// assert_eq!(extract_fallback_name("2 zucchinis, sliced"), "zucchinis");
/// ```
pub fn extract_fallback_name(text: &str) -> String {
    let after_units = match strip_leading_quantity_unit(text) {
        Some(stripped) => {
            trace!("Stripped quantity-unit head: '{}' -> '{}'", text, stripped);
            stripped
        }
        // No unit keyword at the head; only a bare quantity may lead
        None => strip_bare_leading_quantity(text),
    };

    let truncated = truncate_at_delimiter(after_units);
    let cleaned = strip_residual_punctuation(truncated);
    let name = take_first_token(cleaned);

    debug!("Fallback name for '{}': '{}'", text, name);
    name.to_string()
}
