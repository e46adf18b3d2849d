//! Recipe and plan records as supplied by the surrounding app.
//!
//! The core reads these as plain data and never mutates the stored copies;
//! the scaling helpers return new values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scale::{scale_amount, scale_servings, scale_time};

/// An ingredient amount as stored: either free text or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{n}"),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

/// One ingredient line within a recipe section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub item: String,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One step within a recipe section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub active: bool,
}

/// A stored recipe: sectioned ingredient and step lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: BTreeMap<String, Vec<RecipeIngredient>>,
    #[serde(default)]
    pub sections: BTreeMap<String, Vec<RecipeStep>>,
}

/// A scheduled recipe whose amounts are already scaled for its chosen
/// serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePlan {
    pub recipe_id: String,
    pub recipe_name: String,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Copy of the recipe with every quantity and duration scaled for the
    /// target serving count.
    pub fn scaled_for(&self, target_servings: u32) -> Recipe {
        let ratio = scale_servings(self.servings, target_servings);
        let mut scaled = self.clone();
        scaled.servings = target_servings;
        for section in scaled.ingredients.values_mut() {
            for ingredient in section.iter_mut() {
                ingredient.amount =
                    Amount::Text(scale_amount(&ingredient.amount.to_string(), ratio));
            }
        }
        for section in scaled.sections.values_mut() {
            for step in section.iter_mut() {
                step.duration_minutes = step.duration_minutes.map(|m| scale_time(m, ratio));
            }
        }
        scaled
    }

    /// Flatten the recipe into the shape the shopping list consumes, with
    /// amounts scaled for the target serving count.
    pub fn plan_for(&self, target_servings: u32) -> RecipePlan {
        let ratio = scale_servings(self.servings, target_servings);
        let ingredients = self
            .ingredients
            .values()
            .flatten()
            .map(|ingredient| RecipeIngredient {
                item: ingredient.item.clone(),
                amount: Amount::Text(scale_amount(&ingredient.amount.to_string(), ratio)),
                category: ingredient.category.clone(),
            })
            .collect();
        RecipePlan {
            recipe_id: self.id.clone(),
            recipe_name: self.title.clone(),
            servings: target_servings,
            ingredients,
        }
    }

    /// Total minutes across all steps that carry a duration.
    pub fn total_minutes(&self) -> u32 {
        self.sections
            .values()
            .flatten()
            .filter_map(|step| step.duration_minutes)
            .sum()
    }

    /// Minutes of hands-on steps only.
    pub fn active_minutes(&self) -> u32 {
        self.sections
            .values()
            .flatten()
            .filter(|step| step.active)
            .filter_map(|step| step.duration_minutes)
            .sum()
    }
}
