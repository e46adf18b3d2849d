//! Generate a shopping-category audit CSV for a list of ingredient names.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use skillet_core::categorize_item;

pub fn run(input: Option<&Path>) -> Result<()> {
    let content = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    println!("ingredient,category");
    for line in content.lines() {
        let item = line.trim();
        if item.is_empty() {
            continue;
        }
        // Escape CSV fields that contain commas or quotes
        let escaped = if item.contains(',') || item.contains('"') {
            format!("\"{}\"", item.replace('"', "\"\""))
        } else {
            item.to_string()
        };
        println!("{},{}", escaped, categorize_item(item).as_str());
    }

    Ok(())
}
