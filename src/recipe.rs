//! # Recipe Data Model
//!
//! Data structures for scraped recipe JSON files (title, description,
//! ingredients, instructions, nutrition facts) and the row assembly that
//! turns a recipe's raw ingredient lines into parsed, categorized records
//! ready for the storage collaborator.
//!
//! The scraped JSON nests its `"Ingredients"` and `"Instructions"` lists
//! under the `ingredients` key; the model mirrors that shape rather than
//! flattening it, so existing recipe files deserialize unchanged.

use crate::categorizer::{categorize, Category};
use crate::ingredient_parser::parse_ingredient_advanced;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A scraped recipe as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub ingredients: IngredientSections,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: BTreeMap<String, String>,
}

/// The section lists scraped from the recipe card markup. List items land
/// under whichever heading contained "ingredient" or "instruction".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSections {
    #[serde(rename = "Ingredients", default)]
    pub ingredients: Vec<String>,
    #[serde(rename = "Instructions", default)]
    pub instructions: Vec<String>,
}

/// One parsed ingredient row in the shape the storage collaborator persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// The raw ingredient line as scraped
    pub original_text: String,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: String,
    pub preparation: String,
    pub category: Category,
    /// 1-based position within the recipe's ingredient list. Position is
    /// significant for later storage and display.
    pub position: usize,
}

impl Recipe {
    /// Deserialize a recipe from a JSON string
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a recipe from a JSON file on disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
        let recipe = Self::from_json_str(&json)
            .with_context(|| format!("Invalid recipe JSON: {}", path.display()))?;
        debug!(
            "Loaded recipe '{}' with {} ingredient lines",
            recipe.title,
            recipe.ingredients.ingredients.len()
        );
        Ok(recipe)
    }
}

/// Parse and categorize every ingredient line of a recipe.
///
/// Output order matches input order; each record carries its 1-based
/// position. Lines are independent: a malformed line degrades to its
/// fallback name and never aborts the batch.
pub fn parse_recipe_ingredients(recipe: &Recipe) -> Vec<IngredientRecord> {
    let records: Vec<IngredientRecord> = recipe
        .ingredients
        .ingredients
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let outcome = parse_ingredient_advanced(line);
            let category = categorize(outcome.name());
            let parsed = outcome.into_ingredient();

            IngredientRecord {
                original_text: line.clone(),
                name: parsed.name,
                quantity: parsed.quantity,
                unit: parsed.unit,
                preparation: parsed.preparation,
                category,
                position: index + 1,
            }
        })
        .collect();

    info!(
        "Parsed {} ingredient rows for recipe '{}'",
        records.len(),
        recipe.title
    );
    records
}
