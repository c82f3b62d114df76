//! Prefix matching of a typed fragment against one unit

use crate::Unit;

/// How well a fragment matches a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    None,
    /// Fragment is a strict prefix of the symbol or a name
    Partial,
    /// Fragment equals the symbol or a name
    Exact,
}

impl Unit {
    /// Match `fragment` against this unit.
    ///
    /// The symbol is checked first and case-sensitively; when it prefixes,
    /// names are not consulted at all. Otherwise any name that the fragment
    /// prefixes counts, and an exact name wins over partial ones.
    pub fn matches(&self, fragment: &str) -> MatchType {
        if self.symbol.starts_with(fragment) {
            return if self.symbol == fragment { MatchType::Exact } else { MatchType::Partial };
        }

        let mut result = MatchType::None;
        for name in &self.names {
            if name == fragment {
                return MatchType::Exact;
            }
            if name.starts_with(fragment) {
                result = MatchType::Partial;
            }
        }
        result
    }
}
