pub mod chart;
pub mod error;
pub mod record;
pub mod views;

pub use chart::{Axis, Bar, BarChart, Dashboard, HistogramChart, ScatterChart, ScatterPoint};
pub use error::{AtlasError, Result};
pub use record::{
    Column, CountryRecord, SENTINEL, TOKEN_SEPARATOR, format_numeric, split_tokens,
};
pub use views::{
    Describe, Histogram, HistogramBin, Measure, RegionSummary, RegionTotal, TokenCount,
    TokenField,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_reads_record_values() {
        let record = CountryRecord {
            population: Some(42),
            area: None,
            ..CountryRecord::default()
        };
        assert_eq!(Measure::Population.value(&record), Some(42.0));
        assert_eq!(Measure::Area.value(&record), None);
        assert_eq!(Measure::Area.to_string(), "Area");
        assert_eq!(TokenField::Currencies.to_string(), "Currencies");
    }

    #[test]
    fn record_serializes_missing_numbers_as_null() {
        let record = CountryRecord::default();
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["population"], serde_json::Value::Null);
        assert_eq!(json["area"], serde_json::Value::Null);
        assert_eq!(json["name"], "N/A");
        let round: CountryRecord = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn axis_defaults_to_linear_when_flag_absent() {
        let axis: Axis = serde_json::from_str(r#"{"label":"Area"}"#).expect("deserialize axis");
        assert_eq!(axis, Axis::linear("Area"));
    }
}
