//! # Ingredient Parser
//!
//! Primary confidence-gated parser for single ingredient lines. The line is
//! segmented into amount, name, and preparation spans, and the name span
//! carries a deterministic confidence score. When the score clears the
//! acceptance threshold the structured result is emitted; otherwise, or on
//! any extraction error, control transfers to the fallback parser. The
//! transfer is logged and never surfaces as an error to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_import::ingredient_parser::parse_ingredient_advanced;
//!
//! let outcome = parse_ingredient_advanced("1/2 cup couscous");
//! assert_eq!(outcome.name(), "couscous");
//! ```

use crate::fallback_parser::extract_fallback_name;
use crate::ingredient_model::{ParseOutcome, ParsedIngredient};
use crate::measurement_units::is_unit_keyword;
use log::{debug, info, trace};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum name-span confidence for accepting a structured parse. The gate
/// applies to the name span only; amount and preparation spans are not gated.
pub const NAME_CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Regex patterns for span segmentation
static SPAN_PATTERNS: LazyLock<SpanPatterns> = LazyLock::new(SpanPatterns::new);

/// Compiled regex patterns for parsing
struct SpanPatterns {
    /// Matches a leading quantity token: "2", "1.5", "1/2", "2 1/4"
    leading_quantity: Regex,
    /// Matches a full fraction quantity: "1/2", "2 1/4"
    fraction: Regex,
    /// Matches parenthetical asides: "(200g/7oz each, bone in)"
    parenthetical: Regex,
}

impl SpanPatterns {
    fn new() -> Self {
        Self {
            leading_quantity: Regex::new(r"^\s*(\d+\s+\d+/\d+|\d+/\d+|\d*\.\d+|\d+)").unwrap(),
            fraction: Regex::new(r"^(?:(\d+)\s+)?(\d+)/(\d+)$").unwrap(),
            parenthetical: Regex::new(r"\([^)]*\)").unwrap(),
        }
    }
}

/// A text span with the model's confidence in it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSpan {
    pub text: String,
    pub confidence: f32,
}

/// A detected amount span: numeric quantity plus the unit as written
#[derive(Debug, Clone, PartialEq)]
pub struct AmountSpan {
    pub quantity: f64,
    pub unit: String,
}

/// Segmentation result for one ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedLine {
    /// Candidate name spans, best first. Always non-empty; a degenerate line
    /// yields a single empty span with zero confidence.
    pub name_spans: Vec<ScoredSpan>,
    /// Detected amount spans in reading order (dual-unit heads yield two)
    pub amounts: Vec<AmountSpan>,
    /// Preparation clause after the first top-level comma
    pub preparation: Option<String>,
}

/// Errors that can occur during structured extraction
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    InvalidQuantity(String),
    ZeroDenominator,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::InvalidQuantity(text) => write!(f, "Invalid quantity: {}", text),
            ExtractError::ZeroDenominator => write!(f, "Zero denominator in fraction"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Convert a textual quantity into a finite f64.
///
/// Handles plain integers, decimals, fractions ("1/2"), and mixed numbers
/// ("2 1/4"). The returned value round-trips the intended rational value
/// subject to floating-point precision.
pub fn quantity_value(text: &str) -> Result<f64, ExtractError> {
    let text = text.trim();

    if let Some(captures) = SPAN_PATTERNS.fraction.captures(text) {
        let whole: f64 = captures
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0);
        let numerator: f64 = captures[2]
            .parse()
            .map_err(|_| ExtractError::InvalidQuantity(text.to_string()))?;
        let denominator: f64 = captures[3]
            .parse()
            .map_err(|_| ExtractError::InvalidQuantity(text.to_string()))?;

        if denominator == 0.0 {
            return Err(ExtractError::ZeroDenominator);
        }
        return Ok(whole + numerator / denominator);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| ExtractError::InvalidQuantity(text.to_string()))?;
    if !value.is_finite() {
        return Err(ExtractError::InvalidQuantity(text.to_string()));
    }
    Ok(value)
}

/// Score a candidate name span.
///
/// The heuristic favors spans made of letters, spaces, hyphens, and
/// apostrophes; digits and stray punctuation dilute the score, and very
/// short spans are penalized. Empty spans score zero.
fn score_name(name: &str) -> f32 {
    if name.is_empty() {
        return 0.0;
    }

    let total = name.chars().count() as f32;
    let plain = name
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || *c == '-' || *c == '\'')
        .count() as f32;

    let mut score = 0.95 * (plain / total);
    if name.chars().any(|c| c.is_ascii_digit()) {
        score -= 0.3;
    }
    if total < 3.0 {
        score -= 0.2;
    }
    score.clamp(0.0, 1.0)
}

/// Take a leading alphabetic word off `text` if it is a unit keyword.
/// Returns (unit, remainder); unit is empty when the word is not a unit.
fn consume_unit(text: &str) -> (&str, &str) {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..end];

    // A unit must be followed by a boundary, not glued to more letters
    let boundary_ok = trimmed[end..]
        .chars()
        .next()
        .map_or(true, |c| c.is_whitespace() || c == '/');

    if !candidate.is_empty() && boundary_ok && is_unit_keyword(candidate) {
        (candidate, trimmed[end..].trim_start())
    } else {
        ("", trimmed)
    }
}

/// Segment one ingredient line into scored spans.
///
/// Parenthetical asides are discarded, the preparation clause is split off at
/// the first remaining comma, amount spans are peeled from the head, and the
/// remainder becomes the name span.
pub fn extract_spans(text: &str) -> Result<ExtractedLine, ExtractError> {
    let flattened = SPAN_PATTERNS.parenthetical.replace_all(text, "");

    let (head, preparation) = match flattened.split_once(',') {
        Some((before, after)) => {
            let clause = after.trim();
            (
                before.trim().to_string(),
                (!clause.is_empty()).then(|| clause.to_string()),
            )
        }
        None => (flattened.trim().to_string(), None),
    };

    let mut amounts = Vec::new();
    let mut rest = head.as_str();

    while let Some(captures) = SPAN_PATTERNS.leading_quantity.captures(rest) {
        let quantity_text = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let quantity = quantity_value(quantity_text)?;

        let after_quantity = &rest[captures.get(0).map(|m| m.end()).unwrap_or(0)..];
        let (unit, remainder) = consume_unit(after_quantity);

        trace!(
            "Amount span: quantity='{}' unit='{}' in '{}'",
            quantity_text,
            unit,
            text
        );
        amounts.push(AmountSpan {
            quantity,
            unit: unit.to_string(),
        });
        rest = remainder;

        // Dual-unit notation: "50 g / 1.5 oz feta cheese"
        if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped.trim_start();
        } else {
            break;
        }
    }

    let name = rest.trim();
    let name_spans = vec![ScoredSpan {
        text: name.to_string(),
        confidence: score_name(name),
    }];

    Ok(ExtractedLine {
        name_spans,
        amounts,
        preparation,
    })
}

/// Parse an ingredient line through the confidence-gated dual-path pipeline.
///
/// Never returns an error and never panics: low confidence and extraction
/// failures both degrade to the fallback parser, with the transfer logged
/// informationally.
///
/// # Examples
///
/// ```rust
/// use recipe_import::ingredient_parser::parse_ingredient_advanced;
///
/// let outcome = parse_ingredient_advanced("2 zucchinis, sliced");
/// assert!(outcome.is_structured());
///
/// // Malformed quantities degrade to the fallback path instead of erroring
/// let outcome = parse_ingredient_advanced("1/0 cup flour");
/// assert!(!outcome.is_structured());
/// assert_eq!(outcome.name(), "flour");
/// ```
pub fn parse_ingredient_advanced(text: &str) -> ParseOutcome {
    match extract_spans(text) {
        Ok(extracted) => {
            // Segmentation always produces at least one name span
            let top = &extracted.name_spans[0];
            if top.confidence > NAME_CONFIDENCE_THRESHOLD {
                debug!(
                    "Accepted structured parse for '{}' (confidence {:.2})",
                    text, top.confidence
                );
                let first_amount = extracted.amounts.first();
                return ParseOutcome::Structured(ParsedIngredient::structured(
                    &top.text,
                    first_amount.map(|amount| amount.quantity),
                    first_amount.map(|amount| amount.unit.as_str()).unwrap_or(""),
                    extracted.preparation.as_deref().unwrap_or(""),
                    text,
                ));
            }
            info!(
                "Low name confidence ({:.2}) for '{}', using fallback parser",
                top.confidence, text
            );
        }
        Err(error) => {
            info!(
                "Structured extraction failed for '{}' ({}), using fallback parser",
                text, error
            );
        }
    }

    ParseOutcome::Minimal(extract_fallback_name(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_value_formats() {
        assert_eq!(quantity_value("2").unwrap(), 2.0);
        assert_eq!(quantity_value("1.5").unwrap(), 1.5);
        assert_eq!(quantity_value("1/2").unwrap(), 0.5);
        assert_eq!(quantity_value("2 1/4").unwrap(), 2.25);
    }

    #[test]
    fn test_quantity_value_errors() {
        assert_eq!(quantity_value("1/0"), Err(ExtractError::ZeroDenominator));
        assert!(matches!(
            quantity_value("abc"),
            Err(ExtractError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_fraction_round_trips_through_f64() {
        let half = quantity_value("1/2").unwrap();
        assert!(half.is_finite());
        assert!((half - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_simple_line() {
        let extracted = extract_spans("1/2 cup couscous").unwrap();

        assert_eq!(extracted.name_spans[0].text, "couscous");
        assert!(extracted.name_spans[0].confidence > NAME_CONFIDENCE_THRESHOLD);
        assert_eq!(extracted.amounts.len(), 1);
        assert_eq!(extracted.amounts[0].quantity, 0.5);
        assert_eq!(extracted.amounts[0].unit, "cup");
        assert_eq!(extracted.preparation, None);
    }

    #[test]
    fn test_extract_dual_unit_line() {
        let extracted = extract_spans("50 g / 1.5 oz feta cheese").unwrap();

        assert_eq!(extracted.amounts.len(), 2);
        assert_eq!(extracted.amounts[0].quantity, 50.0);
        assert_eq!(extracted.amounts[0].unit, "g");
        assert_eq!(extracted.amounts[1].quantity, 1.5);
        assert_eq!(extracted.amounts[1].unit, "oz");
        assert_eq!(extracted.name_spans[0].text, "feta cheese");
    }

    #[test]
    fn test_extract_preparation_and_asides() {
        let extracted =
            extract_spans("2 pork cutlets, at room temperature (200g/7oz each, bone in)").unwrap();

        assert_eq!(extracted.name_spans[0].text, "pork cutlets");
        assert_eq!(extracted.amounts[0].quantity, 2.0);
        assert_eq!(extracted.amounts[0].unit, "");
        assert_eq!(
            extracted.preparation.as_deref(),
            Some("at room temperature")
        );
    }

    #[test]
    fn test_extract_bare_count() {
        let extracted = extract_spans("2 zucchinis, sliced").unwrap();

        assert_eq!(extracted.name_spans[0].text, "zucchinis");
        assert_eq!(extracted.amounts[0].quantity, 2.0);
        assert_eq!(extracted.amounts[0].unit, "");
        assert_eq!(extracted.preparation.as_deref(), Some("sliced"));
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let extracted = extract_spans("").unwrap();
        assert_eq!(extracted.name_spans[0].text, "");
        assert_eq!(extracted.name_spans[0].confidence, 0.0);

        let extracted = extract_spans("   ").unwrap();
        assert_eq!(extracted.name_spans[0].confidence, 0.0);
    }

    #[test]
    fn test_digit_heavy_name_scores_low() {
        let extracted = extract_spans("2 cups 200g").unwrap();
        assert_eq!(extracted.name_spans[0].text, "200g");
        assert!(extracted.name_spans[0].confidence <= NAME_CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_structured_path_accepted() {
        let outcome = parse_ingredient_advanced("1 tbsp lemon pepper");
        assert!(outcome.is_structured());

        let ingredient = outcome.into_ingredient();
        assert_eq!(ingredient.name, "lemon pepper");
        assert_eq!(ingredient.quantity, Some(1.0));
        assert_eq!(ingredient.unit, "tbsp");
        assert_eq!(ingredient.original, "1 tbsp lemon pepper");
        assert!(ingredient.parsed_successfully);
    }

    #[test]
    fn test_low_confidence_falls_back() {
        let outcome = parse_ingredient_advanced("2 cups 200g");
        assert!(!outcome.is_structured());
    }

    #[test]
    fn test_extraction_error_falls_back() {
        // Zero denominator raises inside extraction; the caller sees a
        // fallback outcome, never an error
        let outcome = parse_ingredient_advanced("1/0 cup flour");
        assert!(!outcome.is_structured());
        assert_eq!(outcome.name(), "flour");
    }

    #[test]
    fn test_empty_input_never_panics() {
        let outcome = parse_ingredient_advanced("");
        assert_eq!(outcome.name(), "");
        assert!(!outcome.is_structured());

        let outcome = parse_ingredient_advanced("   \t  ");
        assert_eq!(outcome.name(), "");
    }

    #[test]
    fn test_threshold_is_name_span_only() {
        // A clean name with a messy amount still passes; the gate never
        // inspects amount spans
        let outcome = parse_ingredient_advanced("2 1/4 cups couscous");
        assert!(outcome.is_structured());
        assert_eq!(outcome.into_ingredient().quantity, Some(2.25));
    }
}
