//! Launcher result items
//!
//! The launcher reads `{"items": [...]}` from stdout. Optional fields are
//! left out of the JSON entirely rather than sent as null.

use measure_core::{codes, MeasureError};
use measure_units::Unit;
use serde::Serialize;

const INFINITY: &str = "∞";

/// One row in the launcher's result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptFilterItem {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    /// Text placed in the query box when the row is tabbed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    /// Payload passed on when the row is actioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
}

impl ScriptFilterItem {
    /// A unit the user can pick as source; tabbing fills "<title> to "
    ///
    /// `rendered` is the typed value formatted in `unit`.
    pub fn suggestion(rendered: String, unit: &Unit) -> Self {
        Self {
            uid: unit.symbol.clone(),
            autocomplete: Some(format!("{} to ", rendered)),
            title: rendered,
            subtitle: unit.display_name(),
            arg: None,
            valid: false,
        }
    }

    /// A finished conversion; actioning it passes the converted text on
    pub fn conversion(source_rendered: &str, source: &Unit, target_rendered: String, target: &Unit) -> Self {
        Self {
            uid: format!("{} to {}", source.symbol, target.symbol),
            subtitle: format!("{} → {}", source.display_name(), target.display_name()),
            autocomplete: Some(format!("{} to {}", source_rendered, target.symbol)),
            arg: Some(target_rendered.clone()),
            title: target_rendered,
            valid: true,
        }
    }

    /// A conversion with no finite result, shown as "∞ <symbol>" and not
    /// actionable
    pub fn unbounded(source_rendered: &str, source: &Unit, target: &Unit) -> Self {
        Self {
            uid: format!("{} to {}", source.symbol, target.symbol),
            title: format!("{} {}", INFINITY, target.symbol),
            subtitle: format!("{} → {}", source.display_name(), target.display_name()),
            autocomplete: Some(format!("{} to {}", source_rendered, target.symbol)),
            arg: None,
            valid: false,
        }
    }

    /// Guidance row for a recoverable query error
    pub fn guidance(error: &MeasureError) -> Self {
        let uid = match error.code.as_str() {
            codes::INVALID_INPUT => "Invalid Input".to_string(),
            codes::INVALID_UNIT => "Invalid Unit".to_string(),
            other => other.to_string(),
        };
        Self {
            uid,
            title: error.message.clone(),
            subtitle: error.suggestion.clone().unwrap_or_default(),
            autocomplete: None,
            arg: None,
            valid: false,
        }
    }
}

/// Top-level payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemList {
    pub items: Vec<ScriptFilterItem>,
}

impl ItemList {
    pub fn new(items: Vec<ScriptFilterItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
