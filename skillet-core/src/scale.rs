//! Quantity, time, and servings scaling.

use crate::amount::parse_amount;
use crate::rounding::{format_amount, round_amount};

/// Fraction of the quantity growth that carries over into cook time:
/// doubling a batch adds 40% more time, not 100%.
const TIME_GROWTH_FACTOR: f64 = 0.4;

/// Scale a quantity string by a serving ratio.
///
/// Qualitative amounts ("to taste") come back unchanged. The unit token is
/// reattached as written; scaling never converts units.
pub fn scale_amount(amount_text: &str, ratio: f64) -> String {
    let parsed = parse_amount(amount_text);
    if parsed.value == 0.0 {
        return parsed.original;
    }
    let scaled = format_amount(round_amount(parsed.value * ratio));
    if parsed.unit.is_empty() {
        scaled
    } else {
        format!("{} {}", scaled, parsed.unit)
    }
}

/// Scale a duration for a changed batch size.
///
/// Time does not scale linearly with quantity. Smaller batches keep the
/// full time; larger batches grow sub-linearly.
pub fn scale_time(base_minutes: u32, ratio: f64) -> u32 {
    if ratio <= 1.0 {
        return base_minutes;
    }
    (base_minutes as f64 * (1.0 + (ratio - 1.0) * TIME_GROWTH_FACTOR)).round() as u32
}

/// Ratio between a recipe's base serving count and the user's target.
///
/// A zero base yields a neutral ratio of 1.0 rather than dividing by zero.
pub fn scale_servings(base_servings: u32, target_servings: u32) -> f64 {
    if base_servings == 0 {
        return 1.0;
    }
    target_servings as f64 / base_servings as f64
}
