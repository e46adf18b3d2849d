//! Unit-system preferences and ingredient classification.
//!
//! The converter picks a target unit by classifying the ingredient into one
//! of five preference categories and reading that category's unit token from
//! the user's preference record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::units::lookup_unit;

/// Preference category of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientClass {
    SmallAmounts,
    Fats,
    Liquids,
    Produce,
    DryGoods,
}

/// Ordered classification rules: the first rule with a matching keyword wins.
///
/// Order matters. Clove/bulb garlic forms must be claimed as produce before
/// the seasoning rule sees "garlic", and "onion powder" must be claimed as a
/// seasoning before the produce rule sees "onion".
pub const CLASS_RULES: &[(IngredientClass, &[&str])] = &[
    (IngredientClass::Produce, &["clove", "bulb", "bell pepper"]),
    (
        IngredientClass::SmallAmounts,
        &[
            "salt", "pepper", "spice", "powder", "seasoning", "cumin", "paprika", "cinnamon",
            "nutmeg", "oregano", "thyme", "rosemary", "basil", "cayenne", "turmeric", "coriander",
            "vanilla", "extract", "yeast", "garlic", "ginger",
        ],
    ),
    (
        IngredientClass::Fats,
        &["butter", "oil", "ghee", "margarine", "lard", "shortening"],
    ),
    (
        IngredientClass::Liquids,
        &["milk", "water", "stock", "broth", "juice", "vinegar", "wine", "cream"],
    ),
    (
        IngredientClass::Produce,
        &[
            "onion", "potato", "tomato", "chili", "chilli", "scallion", "cilantro", "culantro",
            "carrot", "celery", "lettuce", "mushroom",
        ],
    ),
];

/// Classify an ingredient name into its preference category.
///
/// Falls back to dry goods when nothing matches.
pub fn classify_ingredient(name: &str) -> IngredientClass {
    let lower = name.to_lowercase();
    for (class, keywords) in CLASS_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *class;
        }
    }
    IngredientClass::DryGoods
}

/// Target unit tokens per preference category.
///
/// Mirrors the mobile app's preferences record; each field binds one
/// category to a supported unit token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitPreference {
    pub dry_goods: String,
    pub liquids: String,
    pub small_amounts: String,
    pub fats: String,
    pub produce: String,
}

impl UnitPreference {
    /// The unit token the converter should aim for, given an ingredient's
    /// category.
    pub fn target_for(&self, class: IngredientClass) -> &str {
        match class {
            IngredientClass::DryGoods => &self.dry_goods,
            IngredientClass::Liquids => &self.liquids,
            IngredientClass::SmallAmounts => &self.small_amounts,
            IngredientClass::Fats => &self.fats,
            IngredientClass::Produce => &self.produce,
        }
    }

    /// Check that every bound token resolves in the unit table.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        for token in [
            &self.dry_goods,
            &self.liquids,
            &self.small_amounts,
            &self.fats,
            &self.produce,
        ] {
            if lookup_unit(token).is_none() {
                return Err(PreferenceError::UnknownUnit(token.clone()));
            }
        }
        Ok(())
    }
}

/// Built-in unit-system presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
    Baker,
}

impl UnitSystem {
    /// The preference record for this preset.
    pub fn preference(&self) -> UnitPreference {
        match self {
            UnitSystem::Metric => UnitPreference {
                dry_goods: "g".to_string(),
                liquids: "ml".to_string(),
                small_amounts: "g".to_string(),
                fats: "g".to_string(),
                produce: "whole".to_string(),
            },
            UnitSystem::Imperial => UnitPreference {
                dry_goods: "cups".to_string(),
                liquids: "cups".to_string(),
                small_amounts: "tsp".to_string(),
                fats: "tbsp".to_string(),
                produce: "whole".to_string(),
            },
            UnitSystem::Baker => UnitPreference {
                dry_goods: "g".to_string(),
                liquids: "ml".to_string(),
                small_amounts: "tsp".to_string(),
                fats: "g".to_string(),
                produce: "whole".to_string(),
            },
        }
    }
}

impl FromStr for UnitSystem {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            "baker" => Ok(UnitSystem::Baker),
            other => Err(PreferenceError::UnknownSystem(other.to_string())),
        }
    }
}
