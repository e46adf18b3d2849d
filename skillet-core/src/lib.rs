pub mod amount;
pub mod consolidate;
pub mod convert;
pub mod error;
pub mod preferences;
pub mod recipe;
pub mod rounding;
pub mod scale;
pub mod units;

pub use amount::{parse_amount, ParsedAmount};
pub use consolidate::{
    categorize_item, clear_statuses, consolidate_shopping_list, need_to_buy, normalize_item_name,
    shopping_stats, BreakdownEntry, ConsolidatedItem, ShoppingCategory, ShoppingStats,
};
pub use convert::convert_ingredient;
pub use error::PreferenceError;
pub use preferences::{classify_ingredient, IngredientClass, UnitPreference, UnitSystem};
pub use recipe::{Amount, Recipe, RecipeIngredient, RecipePlan, RecipeStep};
pub use scale::{scale_amount, scale_servings, scale_time};
