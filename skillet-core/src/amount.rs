//! Amount parsing module.
//!
//! Parses free-form quantity strings (e.g., "1 1/2 cups", "to taste") into
//! a structured value + unit pair.

use serde::{Deserialize, Serialize};

/// A parsed quantity string.
///
/// `value` is 0.0 for qualitative amounts ("to taste") and for strings with
/// no recognizable numeric token. `original` preserves the input verbatim so
/// callers can always fall back to displaying it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub unit: String,
    pub original: String,
}

/// Qualitative amount markers. These are never scaled or converted.
const QUALIFIERS: &[&str] = &["to taste", "as needed", "for garnish", "optional"];

/// Parse a quantity string into a value + unit pair.
///
/// This is best-effort parsing and a total function: every input, including
/// malformed ones, produces a result. When no numeric token is found the
/// whole string becomes the unit so the original text still surfaces
/// somewhere downstream.
pub fn parse_amount(text: &str) -> ParsedAmount {
    let original = text.to_string();
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    if QUALIFIERS.iter().any(|q| lower.contains(q)) {
        return ParsedAmount {
            value: 0.0,
            unit: String::new(),
            original,
        };
    }

    if let Some((value, rest)) = extract_value(trimmed) {
        return ParsedAmount {
            value,
            unit: rest.trim().to_lowercase(),
            original,
        };
    }

    ParsedAmount {
        value: 0.0,
        unit: original.clone(),
        original,
    }
}

/// Extract a leading numeric token: a plain integer or decimal ("2", "2.5"),
/// a simple fraction ("1/2"), or a whole number plus fraction ("3 1/2").
/// Returns the value and the remaining string.
fn extract_value(s: &str) -> Option<(f64, String)> {
    let words: Vec<&str> = s.split_whitespace().collect();
    let first = *words.first()?;

    // Mixed number: whole part followed by a fraction ("3 1/2")
    if words.len() >= 2 && !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
        if let Some(frac) = parse_fraction(words[1]) {
            let whole: f64 = first.parse().ok()?;
            return Some((whole + frac, words[2..].join(" ")));
        }
    }

    // Simple fraction: "1/2"
    if let Some(frac) = parse_fraction(first) {
        return Some((frac, words[1..].join(" ")));
    }

    // Decimal or integer, possibly glued to the unit ("2cups")
    let numeric: String = first
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !numeric.is_empty() && numeric != "." && !first[numeric.len()..].starts_with('/') {
        if let Ok(value) = numeric.parse::<f64>() {
            let mut rest = first[numeric.len()..].to_string();
            for word in &words[1..] {
                if !rest.is_empty() {
                    rest.push(' ');
                }
                rest.push_str(word);
            }
            return Some((value, rest));
        }
    }

    None
}

/// Parse a fraction string like "1/2" or "3/4".
fn parse_fraction(s: &str) -> Option<f64> {
    let (num, denom) = s.split_once('/')?;
    if num.is_empty()
        || denom.is_empty()
        || !num.chars().all(|c| c.is_ascii_digit())
        || !denom.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let num: f64 = num.parse().ok()?;
    let denom: f64 = denom.parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_with_unit() {
        let result = parse_amount("2 cups");
        assert_eq!(result.value, 2.0);
        assert_eq!(result.unit, "cups");
        assert_eq!(result.original, "2 cups");
    }

    #[test]
    fn test_decimal() {
        let result = parse_amount("2.5 oz");
        assert_eq!(result.value, 2.5);
        assert_eq!(result.unit, "oz");
    }

    #[test]
    fn test_simple_fraction() {
        let result = parse_amount("1/2 cup");
        assert_eq!(result.value, 0.5);
        assert_eq!(result.unit, "cup");
    }

    #[test]
    fn test_mixed_number() {
        let result = parse_amount("1 1/2 cups");
        assert_eq!(result.value, 1.5);
        assert_eq!(result.unit, "cups");
        assert_eq!(result.original, "1 1/2 cups");
    }

    #[test]
    fn test_bare_number() {
        let result = parse_amount("2");
        assert_eq!(result.value, 2.0);
        assert_eq!(result.unit, "");
    }

    #[test]
    fn test_number_with_non_unit_tail() {
        let result = parse_amount("2 onions");
        assert_eq!(result.value, 2.0);
        assert_eq!(result.unit, "onions");
    }

    #[test]
    fn test_unit_is_lowercased() {
        let result = parse_amount("3 Tbsp");
        assert_eq!(result.value, 3.0);
        assert_eq!(result.unit, "tbsp");
        assert_eq!(result.original, "3 Tbsp");
    }

    #[test]
    fn test_glued_unit() {
        let result = parse_amount("2cups");
        assert_eq!(result.value, 2.0);
        assert_eq!(result.unit, "cups");
    }

    #[test]
    fn test_qualifiers() {
        for text in ["to taste", "To Taste", "as needed", "for garnish", "optional", "salt to taste"] {
            let result = parse_amount(text);
            assert_eq!(result.value, 0.0, "{text}");
            assert_eq!(result.unit, "", "{text}");
            assert_eq!(result.original, text);
        }
    }

    #[test]
    fn test_no_numeric_token_fallback() {
        let result = parse_amount("a pinch");
        assert_eq!(result.value, 0.0);
        assert_eq!(result.unit, "a pinch");
        assert_eq!(result.original, "a pinch");
    }

    #[test]
    fn test_empty_string() {
        let result = parse_amount("");
        assert_eq!(result.value, 0.0);
        assert_eq!(result.unit, "");
        assert_eq!(result.original, "");
    }

    #[test]
    fn test_zero_denominator_falls_back() {
        let result = parse_amount("1/0 cups");
        assert_eq!(result.value, 0.0);
        assert_eq!(result.original, "1/0 cups");
    }

    #[test]
    fn test_parsing_is_repeatable() {
        let first = parse_amount("1 1/2 cups");
        let second = parse_amount(&first.original);
        assert_eq!(first, second);
    }
}
