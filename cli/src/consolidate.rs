//! Print a consolidated shopping list for a saved plan file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use skillet_core::{consolidate_shopping_list, shopping_stats, RecipePlan};

pub fn run(plan_path: &Path) -> Result<()> {
    let content = fs::read_to_string(plan_path)
        .with_context(|| format!("Failed to read {}", plan_path.display()))?;
    let recipes: Vec<RecipePlan> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", plan_path.display()))?;

    let items = consolidate_shopping_list(&recipes);

    let mut current_category = None;
    for item in &items {
        if current_category != Some(item.category) {
            println!("{}", item.category.as_str().to_uppercase());
            current_category = Some(item.category);
        }
        println!("  [ ] {} - {}", item.item, item.total_amount);
        for entry in &item.breakdown {
            println!("        {} ({})", entry.recipe_name, entry.amount);
        }
    }

    let stats = shopping_stats(&items);
    println!();
    println!(
        "{} items from {} recipes, {} to buy",
        stats.total,
        recipes.len(),
        stats.need_to_buy
    );

    Ok(())
}
