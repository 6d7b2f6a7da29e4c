//! # Recipe Import
//!
//! Extracts structured ingredient data from scraped recipe JSON: a
//! confidence-gated primary parser turns free-form ingredient lines into
//! {name, quantity, unit, preparation} records, a deterministic pattern-based
//! fallback recovers a bare name when the primary parser is underconfident or
//! errors, and a keyword categorizer assigns each name one of a fixed set of
//! category buckets.

pub mod categorizer;
pub mod fallback_parser;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_units;
pub mod recipe;

pub use categorizer::{categorize, Category};
pub use fallback_parser::extract_fallback_name;
pub use ingredient_model::{ParseOutcome, ParsedIngredient};
pub use ingredient_parser::parse_ingredient_advanced;
pub use recipe::{parse_recipe_ingredients, IngredientRecord, Recipe};
