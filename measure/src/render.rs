//! Value renderer
//!
//! Formats numbers for display as "<value> <symbol>".

use measure_core::{FormatConfig, Number};
use measure_units::{Quantity, Unit};

/// Renders values with the configured number of fraction digits
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    config: FormatConfig,
}

impl Renderer {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Round half to even to at most `max_fraction_digits`, drop
    /// trailing zeros, no grouping separators
    pub fn render_number(&self, value: &Number) -> String {
        value.to_fixed(self.config.max_fraction_digits)
    }

    pub fn render(&self, value: &Number, unit: &Unit) -> String {
        format!("{} {}", self.render_number(value), unit.symbol)
    }

    pub fn render_quantity(&self, quantity: &Quantity<'_>) -> String {
        self.render(&quantity.value, quantity.unit)
    }
}
