//! Unit taxonomy and base-unit conversion.
//!
//! Every supported unit maps to a canonical base unit for its measurement
//! kind: grams for weight, milliliters for volume. Count units exist so
//! preference presets can express produce targets ("whole"); they never
//! participate in arithmetic conversion.

use ingredient_density::ML_PER_CUP;

pub const GRAMS_PER_OZ: f64 = 28.3495;
pub const GRAMS_PER_LB: f64 = 453.592;

/// Measurement kind of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Weight,
    Volume,
    Count,
}

/// A unit definition: canonical token, kind, factor into the base unit for
/// its kind, and the display form used when formatting converted amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub token: &'static str,
    pub kind: UnitKind,
    factor: f64,
    pub display: &'static str,
}

impl UnitDef {
    /// Convert a value in this unit into the base unit (grams or ml).
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Convert a value in the base unit back into this unit.
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }
}

const UNITS: &[UnitDef] = &[
    // Weight (base: grams)
    UnitDef { token: "g", kind: UnitKind::Weight, factor: 1.0, display: "g" },
    UnitDef { token: "kg", kind: UnitKind::Weight, factor: 1000.0, display: "kg" },
    UnitDef { token: "mg", kind: UnitKind::Weight, factor: 0.001, display: "mg" },
    UnitDef { token: "oz", kind: UnitKind::Weight, factor: GRAMS_PER_OZ, display: "oz" },
    UnitDef { token: "lb", kind: UnitKind::Weight, factor: GRAMS_PER_LB, display: "lb" },
    // Volume (base: milliliters)
    UnitDef { token: "ml", kind: UnitKind::Volume, factor: 1.0, display: "ml" },
    UnitDef { token: "l", kind: UnitKind::Volume, factor: 1000.0, display: "l" },
    UnitDef { token: "tsp", kind: UnitKind::Volume, factor: ML_PER_CUP / 48.0, display: "tsp" },
    UnitDef { token: "tbsp", kind: UnitKind::Volume, factor: ML_PER_CUP / 16.0, display: "tbsp" },
    UnitDef { token: "fl oz", kind: UnitKind::Volume, factor: ML_PER_CUP / 8.0, display: "fl oz" },
    UnitDef { token: "cup", kind: UnitKind::Volume, factor: ML_PER_CUP, display: "cups" },
    UnitDef { token: "pint", kind: UnitKind::Volume, factor: 2.0 * ML_PER_CUP, display: "pints" },
    UnitDef { token: "quart", kind: UnitKind::Volume, factor: 4.0 * ML_PER_CUP, display: "quarts" },
    UnitDef { token: "gallon", kind: UnitKind::Volume, factor: 16.0 * ML_PER_CUP, display: "gallons" },
    // Count
    UnitDef { token: "whole", kind: UnitKind::Count, factor: 1.0, display: "whole" },
];

/// Resolve a unit token (including common spellings and abbreviations) to
/// its definition. Unknown tokens resolve to `None`; callers degrade to
/// pass-through.
pub fn lookup_unit(token: &str) -> Option<&'static UnitDef> {
    let lower = token.trim().to_lowercase();
    let canonical = match lower.as_str() {
        "g" | "gram" | "grams" => "g",
        "kg" | "kilogram" | "kilograms" => "kg",
        "mg" | "milligram" | "milligrams" => "mg",
        "oz" | "ounce" | "ounces" => "oz",
        "lb" | "lbs" | "pound" | "pounds" => "lb",
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => "ml",
        "l" | "liter" | "liters" | "litre" | "litres" => "l",
        "tsp" | "ts" | "teaspoon" | "teaspoons" => "tsp",
        "tbsp" | "tbs" | "tb" | "tablespoon" | "tablespoons" => "tbsp",
        "fl oz" | "fl. oz" | "fluid ounce" | "fluid ounces" => "fl oz",
        "cup" | "cups" | "c" => "cup",
        "pint" | "pints" | "pt" => "pint",
        "quart" | "quarts" | "qt" => "quart",
        "gallon" | "gallons" | "gal" => "gallon",
        "whole" | "piece" | "pieces" | "each" => "whole",
        _ => return None,
    };
    UNITS.iter().find(|u| u.token == canonical)
}
