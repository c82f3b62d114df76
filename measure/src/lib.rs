//! Measure - free-text unit conversion for launchers
//!
//! Turns a query such as "42 km to miles" into launcher result items:
//! - "42"            every unit, as a preview of the value
//! - "42 kilo"       the units "kilo" could mean
//! - "42 km"         the value in every other length unit
//! - "42 km to mi"   the value in the units the target text names

mod parser;
mod render;
mod items;

pub use parser::{parse, strip_connector, Query, CONNECTORS};
pub use render::Renderer;
pub use items::{ItemList, ScriptFilterItem};

use measure_core::{FormatConfig, MeasureError, Number};
use measure_units::{Catalog, ConversionError, Quantity, Unit};
use tracing::debug;

/// Whether the launcher should treat the run as successful
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Guidance items were produced for bad input
    Failure,
}

/// Items to print plus the exit status to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub items: ItemList,
    pub status: Status,
}

impl Response {
    pub fn success(items: Vec<ScriptFilterItem>) -> Self {
        Self { items: ItemList::new(items), status: Status::Success }
    }

    pub fn failure(error: &MeasureError) -> Self {
        Self {
            items: ItemList::new(vec![ScriptFilterItem::guidance(error)]),
            status: Status::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn to_json(&self) -> Result<String, MeasureError> {
        self.items.to_json()
            .map_err(|e| MeasureError::internal(format!("could not serialize items: {}", e)))
    }
}

/// Main conversion engine
pub struct Measure {
    catalog: Catalog,
    renderer: Renderer,
}

impl Measure {
    pub fn new(catalog: Catalog, config: FormatConfig) -> Self {
        Self { catalog, renderer: Renderer::new(config) }
    }

    /// Engine over the built-in unit catalog
    pub fn standard(config: FormatConfig) -> Result<Self, MeasureError> {
        let catalog = Catalog::standard()
            .map_err(|e| MeasureError::internal(format!("unit catalog: {}", e)))?;
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build the result items for a query.
    ///
    /// Bad input comes back as a recoverable error; anything fatal means the
    /// catalog or arithmetic is broken.
    pub fn items(&self, input: &str) -> Result<Vec<ScriptFilterItem>, MeasureError> {
        match parse(input, &self.catalog)? {
            Query::Preview { value } => Ok(self.suggestions(&value, self.catalog.all())),
            Query::Ambiguous { value, candidates } => {
                debug!(candidates = candidates.len(), "source unit is ambiguous");
                Ok(self.suggestions(&value, candidates.into_iter().map(|m| m.unit).collect()))
            }
            Query::Convert { value, source, targets } => self.conversions(value, source, &targets),
        }
    }

    /// Answer a query, turning recoverable errors into a guidance item
    pub fn respond(&self, input: &str) -> Result<Response, MeasureError> {
        match self.items(input) {
            Ok(items) => Ok(Response::success(items)),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!(error = %e, "query rejected");
                Ok(Response::failure(&e))
            }
        }
    }

    fn suggestions(&self, value: &Number, units: Vec<&Unit>) -> Vec<ScriptFilterItem> {
        units.into_iter()
            .map(|unit| ScriptFilterItem::suggestion(self.renderer.render(value, unit), unit))
            .collect()
    }

    fn conversions<'a>(&self, value: Number, source: &'a Unit, targets: &[&'a Unit]) -> Result<Vec<ScriptFilterItem>, MeasureError> {
        let quantity = Quantity::new(value, source);
        let source_rendered = self.renderer.render_quantity(&quantity);

        let mut items = Vec::with_capacity(targets.len());
        for (&target, result) in targets.iter().zip(quantity.convert_each(targets)) {
            match result {
                Ok(converted) => items.push(ScriptFilterItem::conversion(
                    &source_rendered,
                    source,
                    self.renderer.render_quantity(&converted),
                    target,
                )),
                Err(ConversionError::Unbounded { .. }) => {
                    debug!(source = %source.symbol, target = %target.symbol, "conversion has no finite value");
                    items.push(ScriptFilterItem::unbounded(&source_rendered, source, target));
                }
                Err(e) => return Err(MeasureError::internal(e.to_string())),
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_units::Dimension;
    use serde_json::Value as JsonValue;

    fn test_measure() -> Measure {
        Measure::standard(FormatConfig::new(2)).unwrap()
    }

    fn find<'a>(items: &'a [ScriptFilterItem], uid: &str) -> &'a ScriptFilterItem {
        items.iter()
            .find(|item| item.uid == uid)
            .unwrap_or_else(|| panic!("no item {}", uid))
    }

    #[test]
    fn test_source_only_lists_every_compatible_unit() {
        let measure = test_measure();
        let response = measure.respond("1 km").unwrap();
        assert!(response.is_success());

        let items = &response.items.items;
        let lengths = measure.catalog().by_dimension(Dimension::Length).len();
        assert_eq!(items.len(), lengths - 1);
        assert!(items.iter().all(|item| item.valid));
        assert!(items.iter().all(|item| item.uid.starts_with("km to ")));

        let meters = find(items, "km to m");
        assert_eq!(meters.title, "1000 m");
        assert_eq!(meters.subtitle, "Kilometers → Meters");
        assert_eq!(meters.autocomplete.as_deref(), Some("1 km to m"));
        assert_eq!(meters.arg.as_deref(), Some("1000 m"));
    }

    #[test]
    fn test_explicit_target() {
        let measure = test_measure();
        let items = measure.items("100 c to f").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].uid, "°C to °F");
        assert_eq!(items[0].title, "212 °F");
        assert_eq!(items[0].autocomplete.as_deref(), Some("100 °C to °F"));
        assert!(items[0].valid);
    }

    #[test]
    fn test_target_word_forms() {
        let measure = test_measure();
        for input in ["10 km to mi", "10 km in miles", "10 kilometers as mi", "10km mi"] {
            let items = measure.items(input).unwrap();
            assert_eq!(items.len(), 1, "input {:?}", input);
            assert_eq!(items[0].title, "6.21 mi", "input {:?}", input);
        }
    }

    #[test]
    fn test_multi_word_source() {
        let measure = test_measure();
        let items = measure.items("2 kilometers per hour to mph").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "1.24 mph");
        assert_eq!(items[0].subtitle, "Kilometers Per Hour → Miles Per Hour");
    }

    #[test]
    fn test_ambiguous_source_suggests_units() {
        let measure = test_measure();
        let response = measure.respond("5 kilo").unwrap();
        assert!(response.is_success());

        let items = &response.items.items;
        assert!(items.len() >= 2);
        assert!(items.iter().all(|item| !item.valid && item.arg.is_none()));

        let lengths: Vec<usize> = items.iter().map(|item| item.uid.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]), "{:?}", lengths);

        let km = find(items, "km");
        assert_eq!(km.title, "5 km");
        assert_eq!(km.autocomplete.as_deref(), Some("5 km to "));
    }

    #[test]
    fn test_number_only_previews_catalog() {
        let measure = test_measure();
        let items = measure.items("5").unwrap();
        assert_eq!(items.len(), measure.catalog().len());
        assert!(items.iter().all(|item| !item.valid));
        assert_eq!(find(&items, "imperial gal").title, "5 imperial gal");
    }

    #[test]
    fn test_invalid_input() {
        let measure = test_measure();
        for input in ["abc", "", "km"] {
            let response = measure.respond(input).unwrap();
            assert_eq!(response.status, Status::Failure);
            assert_eq!(response.items.len(), 1);
            assert_eq!(response.items.items[0].uid, "Invalid Input");
            assert_eq!(response.items.items[0].title, "Input a Value and Unit");
        }
    }

    #[test]
    fn test_invalid_unit() {
        let measure = test_measure();
        let response = measure.respond("5 xyz").unwrap();
        assert_eq!(response.status, Status::Failure);
        assert_eq!(response.items.len(), 1);
        let item = &response.items.items[0];
        assert_eq!(item.uid, "Invalid Unit");
        assert_eq!(item.title, "Input a Valid Unit");
        assert_eq!(item.subtitle, "Examples: km, kilometers");
        assert!(!item.valid);
    }

    #[test]
    fn test_unknown_target_falls_back_to_all() {
        let measure = test_measure();
        let all = measure.items("1 km").unwrap();
        let unknown = measure.items("1 km to bananas").unwrap();
        assert_eq!(all, unknown);
    }

    #[test]
    fn test_zero_fuel_consumption_is_unbounded() {
        let measure = test_measure();
        let response = measure.respond("0 L/100km").unwrap();
        assert!(response.is_success());
        assert_eq!(response.items.len(), 2);

        let items = &response.items.items;
        let mpg = find(items, "L/100km to mpg");
        assert_eq!(mpg.title, "∞ mpg");
        assert!(!mpg.valid);
        assert_eq!(mpg.arg, None);
        assert_eq!(find(items, "L/100km to imperial mpg").title, "∞ imperial mpg");

        let items = measure.items("10 L/100km").unwrap();
        assert_eq!(find(&items, "L/100km to mpg").title, "23.52 mpg");
    }

    #[test]
    fn test_zero_mileage() {
        let measure = test_measure();
        let response = measure.respond("0 mpg").unwrap();
        assert!(response.is_success());
        assert_eq!(response.items.len(), 2);

        let items = &response.items.items;
        let per_100km = find(items, "mpg to L/100km");
        assert_eq!(per_100km.title, "∞ L/100km");
        assert!(!per_100km.valid);

        let imperial = find(items, "mpg to imperial mpg");
        assert_eq!(imperial.title, "0 imperial mpg");
        assert!(imperial.valid);
    }

    #[test]
    fn test_decimal_places_config() {
        let measure = Measure::standard(FormatConfig::new(0)).unwrap();
        let items = measure.items("1 mi to km").unwrap();
        assert_eq!(items[0].title, "2 km");

        let measure = Measure::standard(FormatConfig::new(5)).unwrap();
        let items = measure.items("1 mi to km").unwrap();
        assert_eq!(items[0].title, "1.60934 km");
    }

    #[test]
    fn test_json_payload() {
        let measure = test_measure();
        let json = measure.respond("5").unwrap().to_json().unwrap();
        let value: JsonValue = serde_json::from_str(&json).unwrap();

        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), measure.catalog().len());
        for item in items {
            assert!(item.get("arg").is_none());
            assert_eq!(item["valid"], false);
        }
    }

    #[test]
    fn test_repeatable() {
        let measure = test_measure();
        for input in ["5 kilo", "1 km", "100 c to f", "5 xyz"] {
            assert_eq!(measure.respond(input).unwrap(), measure.respond(input).unwrap());
        }
    }
}
