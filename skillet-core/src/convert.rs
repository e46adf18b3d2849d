//! Unit conversion for ingredient amounts.
//!
//! Converts a parsed amount toward the user's preferred unit for the
//! ingredient's category. Every branch that cannot convert returns the
//! original string unchanged; the converter never guesses a value.

use ingredient_density::{find_density, ML_PER_CUP};

use crate::amount::parse_amount;
use crate::preferences::{classify_ingredient, UnitPreference};
use crate::rounding::{format_amount, round_amount};
use crate::units::{lookup_unit, UnitKind};

/// Convert an amount string to the user's preferred unit for this
/// ingredient.
///
/// Same-kind conversions (weight to weight, volume to volume) route through
/// the base unit. Cross-kind conversions require a density entry for the
/// ingredient; without one the original string passes through. Count targets
/// ("whole") always pass through: there is no universal size-to-count table.
pub fn convert_ingredient(
    amount_text: &str,
    ingredient_name: &str,
    prefs: &UnitPreference,
) -> String {
    let parsed = parse_amount(amount_text);
    if parsed.value == 0.0 {
        return amount_text.to_string();
    }

    let Some(source) = lookup_unit(&parsed.unit) else {
        return amount_text.to_string();
    };
    let target_token = prefs.target_for(classify_ingredient(ingredient_name));
    let Some(target) = lookup_unit(target_token) else {
        tracing::debug!(unit = target_token, "preference names an unknown unit");
        return amount_text.to_string();
    };

    if source.kind == UnitKind::Count || target.kind == UnitKind::Count {
        return amount_text.to_string();
    }

    let converted = if source.kind == target.kind {
        target.from_base(source.to_base(parsed.value))
    } else {
        let Some(grams_per_cup) = find_density(ingredient_name) else {
            tracing::debug!(
                ingredient = ingredient_name,
                "no density entry, leaving amount unconverted"
            );
            return amount_text.to_string();
        };
        match (source.kind, target.kind) {
            (UnitKind::Weight, UnitKind::Volume) => {
                let grams = source.to_base(parsed.value);
                target.from_base(grams / grams_per_cup * ML_PER_CUP)
            }
            (UnitKind::Volume, UnitKind::Weight) => {
                let ml = source.to_base(parsed.value);
                target.from_base(ml / ML_PER_CUP * grams_per_cup)
            }
            _ => return amount_text.to_string(),
        }
    };

    format!("{} {}", format_amount(round_amount(converted)), target.display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::UnitSystem;

    #[test]
    fn test_qualitative_amount_passes_through() {
        let prefs = UnitSystem::Metric.preference();
        assert_eq!(convert_ingredient("to taste", "salt", &prefs), "to taste");
        assert_eq!(convert_ingredient("a pinch", "nutmeg", &prefs), "a pinch");
    }

    #[test]
    fn test_unknown_source_unit_passes_through() {
        let prefs = UnitSystem::Metric.preference();
        assert_eq!(convert_ingredient("2 sprigs", "rosemary", &prefs), "2 sprigs");
    }

    #[test]
    fn test_weight_to_weight() {
        let prefs = UnitSystem::Metric.preference();
        // flour is dry goods -> grams; 1 lb = 453.592 g, rounded to whole
        assert_eq!(convert_ingredient("1 lb", "cornmeal", &prefs), "454 g");
        // butter is fats -> grams; 8 oz = 226.796 g
        assert_eq!(convert_ingredient("8 oz", "butter", &prefs), "227 g");
    }

    #[test]
    fn test_volume_to_volume() {
        let prefs = UnitSystem::Metric.preference();
        // milk is a liquid -> ml; 2 cups = 473.176 ml
        assert_eq!(convert_ingredient("2 cups", "milk", &prefs), "473 ml");
        // quart alias; 1 quart = 946.352 ml
        assert_eq!(convert_ingredient("1 quart", "vegetable stock", &prefs), "946 ml");
    }

    #[test]
    fn test_volume_to_weight_via_density() {
        let prefs = UnitSystem::Metric.preference();
        // all-purpose flour: 125 g/cup
        assert_eq!(convert_ingredient("2 cups", "all-purpose flour", &prefs), "250 g");
        // 1/2 tsp ground cinnamon: ~1.3 g, rounded to halves
        assert_eq!(convert_ingredient("1/2 tsp", "ground cinnamon", &prefs), "1.5 g");
    }

    #[test]
    fn test_weight_to_volume_via_density() {
        let prefs = UnitSystem::Imperial.preference();
        // 250 g flour / 125 g/cup = 2 cups
        assert_eq!(convert_ingredient("250 g", "all-purpose flour", &prefs), "2 cups");
    }

    #[test]
    fn test_missing_density_passes_through() {
        let prefs = UnitSystem::Metric.preference();
        // volume -> weight with no density entry
        assert_eq!(convert_ingredient("1 cup", "crushed crackers", &prefs), "1 cup");
    }

    #[test]
    fn test_ambiguous_density_passes_through() {
        let prefs = UnitSystem::Metric.preference();
        // "salt" is explicitly ambiguous in the density table
        assert_eq!(convert_ingredient("1 tsp", "salt", &prefs), "1 tsp");
    }

    #[test]
    fn test_count_target_passes_through() {
        let prefs = UnitSystem::Imperial.preference();
        // produce targets "whole"; never computed from weight
        assert_eq!(convert_ingredient("500 g", "onion", &prefs), "500 g");
    }

    #[test]
    fn test_same_unit_reformats() {
        let prefs = UnitSystem::Imperial.preference();
        assert_eq!(convert_ingredient("2 cups", "cornmeal", &prefs), "2 cups");
        assert_eq!(convert_ingredient("1 1/2 cups", "cornmeal", &prefs), "1.5 cups");
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let to_oz = UnitPreference {
            dry_goods: "oz".to_string(),
            liquids: "cups".to_string(),
            small_amounts: "tsp".to_string(),
            fats: "tbsp".to_string(),
            produce: "whole".to_string(),
        };
        let to_g = UnitSystem::Metric.preference();

        // 283 g -> 10 oz -> 283 g
        let there = convert_ingredient("283 g", "cornmeal", &to_oz);
        assert_eq!(there, "10 oz");
        let back = convert_ingredient(&there, "cornmeal", &to_g);
        assert_eq!(back, "283 g");
    }
}
