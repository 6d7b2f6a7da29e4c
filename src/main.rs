use anyhow::{bail, Result};
use log::info;

use recipe_import::categorizer::categorize;
use recipe_import::ingredient_parser::parse_ingredient_advanced;
use recipe_import::recipe::Recipe;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("Usage: recipe-import <recipe.json> [recipe.json ...]");
    }

    for path in &paths {
        let recipe = Recipe::from_json_file(path)?;
        info!("Processing recipe '{}' from {}", recipe.title, path);

        println!("{}", recipe.title);
        println!("{}", "=".repeat(60));

        let mut structured_count = 0;
        let lines = &recipe.ingredients.ingredients;

        for (index, line) in lines.iter().enumerate() {
            let outcome = parse_ingredient_advanced(line);
            let category = categorize(outcome.name());
            if outcome.is_structured() {
                structured_count += 1;
            }
            let ingredient = outcome.into_ingredient();

            println!("\n{:>2}. {}", index + 1, line);
            println!("    Name: {}", ingredient.name);
            if let Some(quantity) = ingredient.quantity {
                println!("    Quantity: {}", quantity);
            }
            if !ingredient.unit.is_empty() {
                println!("    Unit: {}", ingredient.unit);
            }
            if !ingredient.preparation.is_empty() {
                println!("    Preparation: {}", ingredient.preparation);
            }
            println!("    Category: {}", category);
            println!("    Parsed: {}", ingredient.parsed_successfully);
        }

        println!(
            "\n{} ingredients ({} structured, {} fallback), {} instructions",
            lines.len(),
            structured_count,
            lines.len() - structured_count,
            recipe.ingredients.instructions.len()
        );
    }

    Ok(())
}
