//! Shopping list consolidation.
//!
//! Merges the ingredient lists of every scheduled recipe into one
//! deduplicated list with per-recipe provenance, grouped by store aisle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::recipe::RecipePlan;

/// Store aisle. Declaration order is the shopping-walk sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShoppingCategory {
    Produce,
    Meat,
    Dairy,
    Pantry,
    Spices,
    Other,
}

impl ShoppingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingCategory::Produce => "produce",
            ShoppingCategory::Meat => "meat",
            ShoppingCategory::Dairy => "dairy",
            ShoppingCategory::Pantry => "pantry",
            ShoppingCategory::Spices => "spices",
            ShoppingCategory::Other => "other",
        }
    }
}

/// Ordered aisle rules: the first rule with a matching keyword wins.
/// Match precedence is independent of the display sort order above.
pub const CATEGORY_RULES: &[(ShoppingCategory, &[&str])] = &[
    (
        ShoppingCategory::Meat,
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "fish", "salmon", "tuna", "shrimp",
            "bacon", "sausage", "ham", "steak",
        ],
    ),
    (
        ShoppingCategory::Produce,
        &[
            "onion", "garlic", "tomato", "potato", "bell pepper", "lettuce", "carrot", "celery",
            "cucumber", "spinach", "broccoli", "mushroom", "lemon", "lime", "apple", "banana",
            "cilantro", "culantro", "parsley", "scallion", "ginger", "avocado", "cabbage", "chili",
        ],
    ),
    (
        ShoppingCategory::Dairy,
        &["milk", "cheese", "butter", "cream", "yogurt", "egg"],
    ),
    (
        ShoppingCategory::Spices,
        &[
            "salt", "pepper", "cumin", "paprika", "cinnamon", "oregano", "basil", "thyme",
            "rosemary", "nutmeg", "turmeric", "cayenne", "vanilla", "powder", "seasoning",
            "spice", "flakes",
        ],
    ),
    (
        ShoppingCategory::Pantry,
        &[
            "flour", "sugar", "rice", "pasta", "noodle", "spaghetti", "oil", "bean", "lentil",
            "bread", "stock", "broth", "sauce", "vinegar", "honey", "syrup", "oat", "cereal",
            "chocolate",
        ],
    ),
];

/// Categorize an ingredient into its store aisle.
pub fn categorize_item(item: &str) -> ShoppingCategory {
    let lower = item.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *category;
        }
    }
    ShoppingCategory::Other
}

/// Normalized grouping key: parenthetical qualifiers stripped, lowercased,
/// whitespace collapsed, trailing comma removed.
pub fn normalize_item_name(item: &str) -> String {
    let stripped = strip_parentheticals(item);
    let lower = stripped.to_lowercase();
    let collapsed = lower.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(',').trim().to_string()
}

fn strip_parentheticals(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }
    result
}

/// One recipe's contribution to a consolidated item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub recipe_id: String,
    pub recipe_name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One line of the consolidated shopping list.
///
/// `total_amount` is a display aid built by string concatenation; the
/// `breakdown` list is the authoritative record of what each recipe needs.
/// `checked` and `has_at_home` are the only fields that change after
/// consolidation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedItem {
    /// Normalized ingredient name; unique within one consolidation run.
    pub id: String,
    pub item: String,
    pub total_amount: String,
    pub breakdown: Vec<BreakdownEntry>,
    pub checked: bool,
    pub has_at_home: bool,
    pub category: ShoppingCategory,
}

impl ConsolidatedItem {
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Marking an item as already at home clears its checked flag; the two
    /// signals are mutually exclusive.
    pub fn set_has_at_home(&mut self, has_at_home: bool) {
        self.has_at_home = has_at_home;
        if has_at_home {
            self.checked = false;
        }
    }
}

/// Reset every item's user-driven flags.
pub fn clear_statuses(items: &mut [ConsolidatedItem]) {
    for item in items {
        item.checked = false;
        item.has_at_home = false;
    }
}

/// Merge the ingredients of every scheduled recipe into a deduplicated
/// shopping list.
///
/// Ingredients that normalize to the same name become one item; the first
/// occurrence contributes the display name and aisle, later occurrences
/// append to the breakdown and to the display total. Amounts from different
/// recipes are never arithmetically combined.
pub fn consolidate_shopping_list(recipes: &[RecipePlan]) -> Vec<ConsolidatedItem> {
    let mut items: Vec<ConsolidatedItem> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let key = normalize_item_name(&ingredient.item);
            let amount = ingredient.amount.to_string();
            let entry = BreakdownEntry {
                recipe_id: recipe.recipe_id.clone(),
                recipe_name: recipe.recipe_name.clone(),
                amount: amount.clone(),
                category: ingredient.category.clone(),
            };

            match by_key.get(&key) {
                Some(&index) => {
                    let item = &mut items[index];
                    item.total_amount = format!("{} + {}", item.total_amount, amount);
                    item.breakdown.push(entry);
                }
                None => {
                    by_key.insert(key.clone(), items.len());
                    items.push(ConsolidatedItem {
                        category: categorize_item(&key),
                        id: key,
                        item: ingredient.item.clone(),
                        total_amount: amount,
                        breakdown: vec![entry],
                        checked: false,
                        has_at_home: false,
                    });
                }
            }
        }
    }

    items.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.item.to_lowercase().cmp(&b.item.to_lowercase()))
    });
    items
}

/// Items still needed on the shopping run.
pub fn need_to_buy(items: &[ConsolidatedItem]) -> Vec<ConsolidatedItem> {
    items
        .iter()
        .filter(|item| !item.has_at_home && !item.checked)
        .cloned()
        .collect()
}

/// Progress counters for the shopping screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingStats {
    pub total: usize,
    pub need_to_buy: usize,
    pub at_home: usize,
    pub checked: usize,
    pub progress: f64,
}

/// Derive progress counters from the current list state.
pub fn shopping_stats(items: &[ConsolidatedItem]) -> ShoppingStats {
    let total = items.len();
    let checked = items.iter().filter(|item| item.checked).count();
    let at_home = items.iter().filter(|item| item.has_at_home).count();
    let need_to_buy = items
        .iter()
        .filter(|item| !item.has_at_home && !item.checked)
        .count();
    let progress = if total == 0 {
        0.0
    } else {
        checked as f64 / total as f64
    };
    ShoppingStats {
        total,
        need_to_buy,
        at_home,
        checked,
        progress,
    }
}
