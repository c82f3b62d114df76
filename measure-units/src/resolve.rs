//! Progressive resolution of free text to units
//!
//! Users type unit names followed by noise ("km to miles please"). The
//! resolver tries the longest run of leading words first and drops one
//! trailing word at a time until something in the candidate set matches.

use crate::matcher::MatchType;
use crate::Unit;

/// A unit picked out of a fragment, with how much of the fragment it used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMatch<'a> {
    pub unit: &'a Unit,
    /// Characters of the fragment consumed by the match
    pub matched_chars: usize,
}

/// Resolve the leading words of `fragment` against `units`.
///
/// Returns a single match when some unit matches exactly (the first one in
/// `units` order), every partial match sorted by ascending symbol length
/// otherwise, or nothing when no leading word run matches anything.
pub fn resolve<'a>(fragment: &str, units: &[&'a Unit]) -> Vec<ResolvedMatch<'a>> {
    let words: Vec<&str> = fragment.split_whitespace().collect();

    for word_count in (1..=words.len()).rev() {
        let candidate = words[..word_count].join(" ");
        let matched_chars = candidate.chars().count();

        let mut partial = Vec::new();
        for &unit in units {
            match unit.matches(&candidate) {
                MatchType::Exact => return vec![ResolvedMatch { unit, matched_chars }],
                MatchType::Partial => partial.push(ResolvedMatch { unit, matched_chars }),
                MatchType::None => {}
            }
        }

        if !partial.is_empty() {
            // Stable: equal lengths keep catalog order
            partial.sort_by_key(|m| m.unit.symbol.chars().count());
            return partial;
        }
    }

    Vec::new()
}
