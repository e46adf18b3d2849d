//! End-to-end checks for parsing, scaling, and conversion behavior across
//! the public API.

use skillet_core::{
    convert_ingredient, parse_amount, scale_amount, scale_servings, scale_time, UnitSystem,
};

#[test]
fn parses_mixed_fraction_with_unit() {
    let parsed = parse_amount("1 1/2 cups");
    assert_eq!(parsed.value, 1.5);
    assert_eq!(parsed.unit, "cups");
    assert_eq!(parsed.original, "1 1/2 cups");
}

#[test]
fn doubling_servings_doubles_amounts() {
    let ratio = scale_servings(2, 4);
    assert_eq!(scale_amount("2 cups", ratio), "4 cups");
    assert_eq!(scale_amount("1/2 tsp", ratio), "1 tsp");
    assert_eq!(scale_amount("3", ratio), "6");
}

#[test]
fn qualitative_amounts_are_fixed_points() {
    let prefs = UnitSystem::Metric.preference();
    for text in ["to taste", "as needed", "for garnish", "a pinch", ""] {
        for ratio in [0.25, 0.5, 1.0, 2.0, 3.0] {
            assert_eq!(scale_amount(text, ratio), text, "scale({text:?}, {ratio})");
        }
        assert_eq!(convert_ingredient(text, "salt", &prefs), text);
    }
}

#[test]
fn scaling_is_monotonic_in_the_ratio() {
    let ratios = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 4.0];
    for text in ["1 1/2 cups", "3", "1/4 tsp", "250 g"] {
        let mut last = 0.0;
        for ratio in ratios {
            let value = parse_amount(&scale_amount(text, ratio)).value;
            assert!(
                value >= last,
                "scale({text:?}, {ratio}) went backwards: {value} < {last}"
            );
            last = value;
        }
    }
}

#[test]
fn time_scaling_has_a_floor_and_sublinear_growth() {
    for ratio in [0.1, 0.5, 1.0] {
        assert_eq!(scale_time(60, ratio), 60);
    }
    assert_eq!(scale_time(60, 2.0), 84);
    // growth never exceeds the linear scaling
    for ratio in [1.5, 2.0, 3.0] {
        let scaled = scale_time(40, ratio);
        assert!(scaled > 40);
        assert!((scaled as f64) < 40.0 * ratio);
    }
}

#[test]
fn same_kind_conversion_round_trips_within_tolerance() {
    let metric = UnitSystem::Metric.preference();
    let mut imperial_oz = UnitSystem::Imperial.preference();
    imperial_oz.dry_goods = "oz".to_string();

    // grams -> ounces -> grams stays within one display unit
    for grams in [30_u32, 113, 283, 454] {
        let there = convert_ingredient(&format!("{grams} g"), "cornmeal", &imperial_oz);
        let back = convert_ingredient(&there, "cornmeal", &metric);
        let parsed = parse_amount(&back);
        assert_eq!(parsed.unit, "g", "{grams} g -> {there} -> {back}");
        assert!(
            (parsed.value - f64::from(grams)).abs() <= 15.0,
            "{grams} g -> {there} -> {back}"
        );
    }
}

#[test]
fn density_bridge_round_trips_flour() {
    let metric = UnitSystem::Metric.preference();
    let imperial = UnitSystem::Imperial.preference();

    let grams = convert_ingredient("2 cups", "all-purpose flour", &metric);
    assert_eq!(grams, "250 g");
    let cups = convert_ingredient(&grams, "all-purpose flour", &imperial);
    assert_eq!(cups, "2 cups");
}
