//! Magnitude-dependent rounding shared by the converter and the scaler.

/// Round a converted or scaled amount to a kitchen-sensible precision.
///
/// - below 0.25: nearest 1/32
/// - 0.25 to 1: nearest 1/8
/// - 1 to 10: nearest 0.5
/// - 10 and above: nearest whole number
pub fn round_amount(value: f64) -> f64 {
    if value < 0.25 {
        round_to(value, 1.0 / 32.0)
    } else if value < 1.0 {
        round_to(value, 1.0 / 8.0)
    } else if value < 10.0 {
        round_to(value, 0.5)
    } else {
        value.round()
    }
}

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Format an amount for display. Whole numbers render without a decimal
/// point ("4", not "4.0").
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}
