//! # Ingredient Data Model
//!
//! This module defines the data structures produced by the ingredient parsing
//! pipeline. A parse attempt always yields a [`ParseOutcome`]: either a fully
//! structured [`ParsedIngredient`] from the primary parser, or a minimal bare
//! name recovered by the fallback parser.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_import::ingredient_model::{ParsedIngredient, ParseOutcome};
//!
//! let outcome = ParseOutcome::Minimal("couscous".to_string());
//! let ingredient = outcome.into_ingredient();
//!
//! assert_eq!(ingredient.name, "couscous");
//! assert_eq!(ingredient.quantity, None);
//! assert!(!ingredient.parsed_successfully);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured ingredient extracted from a single line of recipe text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// The core ingredient noun phrase (e.g., "feta cheese", "pork cutlets")
    pub name: String,

    /// Numeric quantity, if one was detected and convertible. Fractional
    /// quantities like "1/2" are carried as their finite f64 value.
    pub quantity: Option<f64>,

    /// Measurement unit as written (e.g., "cup", "g"); empty when absent
    pub unit: String,

    /// Preparation clause found after the first comma (e.g., "sliced",
    /// "at room temperature"); empty when absent
    pub preparation: String,

    /// The verbatim input text. Populated on the primary path only; the
    /// fallback path carries no original text.
    pub original: String,

    /// Whether the primary parser produced this record. `false` means the
    /// record was normalized from a fallback name.
    pub parsed_successfully: bool,
}

impl ParsedIngredient {
    /// Build a record on the primary (structured) path.
    pub fn structured(
        name: &str,
        quantity: Option<f64>,
        unit: &str,
        preparation: &str,
        original: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            preparation: preparation.to_string(),
            original: original.to_string(),
            parsed_successfully: true,
        }
    }

    /// Normalize a bare fallback name into the record shape: quantity absent,
    /// unit and preparation empty.
    pub fn minimal(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
            unit: String::new(),
            preparation: String::new(),
            original: String::new(),
            parsed_successfully: false,
        }
    }

    /// Check if this ingredient carries a numeric quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

/// Result of a parse attempt: the two output shapes of the dual-path pipeline
/// made explicit, so callers never branch on duck-typed inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The primary parser accepted the line with sufficient confidence
    Structured(ParsedIngredient),
    /// The fallback parser recovered a best-effort bare name
    Minimal(String),
}

impl ParseOutcome {
    /// The ingredient name, whichever path produced it
    pub fn name(&self) -> &str {
        match self {
            ParseOutcome::Structured(ingredient) => &ingredient.name,
            ParseOutcome::Minimal(name) => name,
        }
    }

    /// Whether the primary parser accepted the line
    pub fn is_structured(&self) -> bool {
        matches!(self, ParseOutcome::Structured(_))
    }

    /// Convert either shape into a full [`ParsedIngredient`] record.
    pub fn into_ingredient(self) -> ParsedIngredient {
        match self {
            ParseOutcome::Structured(ingredient) => ingredient,
            ParseOutcome::Minimal(name) => ParsedIngredient::minimal(&name),
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(quantity) = self.quantity {
            if quantity.fract() == 0.0 {
                write!(f, "{} ", quantity as i64)?;
            } else {
                write!(f, "{} ", quantity)?;
            }
        }
        if !self.unit.is_empty() {
            write!(f, "{} ", self.unit)?;
        }
        write!(f, "{}", self.name)?;
        if !self.preparation.is_empty() {
            write!(f, ", {}", self.preparation)?;
        }
        Ok(())
    }
}
