//! Ingredient density lookup for weight/volume conversion.
//!
//! Densities are stored as grams per US cup (236.588 ml).
//! A base table covers common pantry ingredients; curated overrides
//! with citations take precedence where the base data is wrong or missing.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Milliliters in one US cup, the reference volume for density data.
pub const ML_PER_CUP: f64 = 236.588;

// =============================================================================
// Data structures
// =============================================================================

/// Base data format (simple name -> density mapping).
#[derive(Deserialize)]
struct BaseDataFile {
    ingredients: HashMap<String, f64>,
    aliases: HashMap<String, String>,
}

/// Curated ingredient entry with citation.
#[derive(Deserialize)]
struct CuratedIngredient {
    grams_per_cup: f64,
    #[allow(dead_code)]
    source: String,
    #[allow(dead_code)]
    url: Option<String>,
}

/// Curated data format (with citations and nullable aliases).
#[derive(Deserialize)]
struct CuratedDataFile {
    ingredients: HashMap<String, CuratedIngredient>,
    /// Aliases can be null to indicate "explicitly ambiguous, do not resolve"
    aliases: HashMap<String, Option<String>>,
}

/// Merged density data from all sources.
struct MergedData {
    /// Ingredient name -> grams per cup
    ingredients: HashMap<String, f64>,
    /// Alias -> canonical name (or None if explicitly ambiguous)
    aliases: HashMap<String, Option<String>>,
}

// =============================================================================
// Data loading
// =============================================================================

/// Embedded JSON data files.
static BASE_JSON: &str = include_str!("data/densities.json");
static CURATED_JSON: &str = include_str!("data/curated.json");

/// Parsed and merged density data.
static DATA: LazyLock<MergedData> = LazyLock::new(|| {
    let base: BaseDataFile =
        serde_json::from_str(BASE_JSON).expect("densities.json should be valid JSON");
    let curated: CuratedDataFile =
        serde_json::from_str(CURATED_JSON).expect("curated.json should be valid JSON");

    // Start with base data
    let mut ingredients = base.ingredients;
    let mut aliases: HashMap<String, Option<String>> = base
        .aliases
        .into_iter()
        .map(|(k, v)| (k, Some(v)))
        .collect();

    // Override with curated data (curated takes precedence)
    for (name, entry) in curated.ingredients {
        ingredients.insert(name, entry.grams_per_cup);
    }
    for (alias, canonical) in curated.aliases {
        aliases.insert(alias, canonical);
    }

    MergedData {
        ingredients,
        aliases,
    }
});

// =============================================================================
// Modifier stripping
// =============================================================================

/// Common modifiers to strip from ingredient names before matching.
const MODIFIERS_TO_STRIP: &[&str] = &[
    // Temperature/state modifiers (prefix)
    "room temperature ",
    "cold ",
    "warm ",
    "melted ",
    "softened ",
    "fresh ",
    "packed ",
    // Preparation modifiers (suffix)
    ", softened",
    ", melted",
    ", cold",
    ", at room temperature",
    ", room temperature",
    ", chilled",
    ", sifted",
    ", packed",
];

/// Strip common modifiers from ingredient name.
fn strip_modifiers(s: &str) -> String {
    let mut result = s.to_string();
    for modifier in MODIFIERS_TO_STRIP {
        if let Some(stripped) = result.strip_prefix(modifier) {
            result = stripped.to_string();
        }
        if let Some(stripped) = result.strip_suffix(modifier) {
            result = stripped.to_string();
        }
    }
    result
}

// =============================================================================
// Plural handling
// =============================================================================

/// Try plural/singular variations of a name.
/// Returns the density if found via plural variation.
fn try_plural_variations(name: &str, ingredients: &HashMap<String, f64>) -> Option<f64> {
    // Try adding 's' for singular -> plural (e.g., "onion" -> "onions")
    let with_s = format!("{name}s");
    if let Some(&density) = ingredients.get(&with_s) {
        return Some(density);
    }

    // Try removing 's' for plural -> singular (e.g., "oats" -> "oat")
    if let Some(without_s) = name.strip_suffix('s') {
        if let Some(&density) = ingredients.get(without_s) {
            return Some(density);
        }
    }

    None
}

// =============================================================================
// Public API
// =============================================================================

/// Normalize ingredient name for matching.
fn normalize_ingredient_name(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Find the density (grams per cup) for an ingredient name.
///
/// Lookup order:
/// 1. Direct lookup in ingredients
/// 2. Lookup via aliases (returns None if alias is explicitly null/ambiguous)
/// 3. Try plural/singular variations
/// 4. After stripping common modifiers, retry steps 1-3
///
/// Returns `None` when no entry matches; callers are expected to leave the
/// original measurement untouched in that case rather than approximate.
pub fn find_density(ingredient_item: &str) -> Option<f64> {
    let normalized = normalize_ingredient_name(ingredient_item);

    // Helper to do full lookup chain
    fn lookup(name: &str, data: &MergedData) -> Option<f64> {
        // Direct lookup
        if let Some(&density) = data.ingredients.get(name) {
            return Some(density);
        }

        // Alias lookup
        if let Some(canonical_opt) = data.aliases.get(name) {
            match canonical_opt {
                Some(canonical) => {
                    if let Some(&density) = data.ingredients.get(canonical) {
                        return Some(density);
                    }
                }
                None => {
                    // Explicitly ambiguous alias - return None immediately
                    return None;
                }
            }
        }

        // Plural/singular variations
        if let Some(density) = try_plural_variations(name, &data.ingredients) {
            return Some(density);
        }

        None
    }

    // Try with original normalized name
    if let Some(density) = lookup(&normalized, &DATA) {
        return Some(density);
    }

    // Try with modifiers stripped
    let stripped = strip_modifiers(&normalized);
    if stripped != normalized {
        if let Some(density) = lookup(&stripped, &DATA) {
            return Some(density);
        }
    }

    None
}

// =============================================================================
// Tests
// =============================================================================
