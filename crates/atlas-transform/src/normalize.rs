//! Raw record normalization.
//!
//! Turns one loosely-typed REST Countries object into a [`CountryRecord`].
//! The conversion is total: any JSON value produces a record, and every
//! missing or mis-shaped field falls back to [`SENTINEL`] (text) or `None`
//! (numbers).

use serde_json::Value;
use tracing::trace;

use atlas_model::{CountryRecord, SENTINEL};

/// Normalize one raw country record.
pub fn normalize_record(raw: &Value) -> CountryRecord {
    CountryRecord {
        name: text_or_sentinel(raw.pointer("/name/common"), "name"),
        capital: text_or_sentinel(raw.get("capital").and_then(|list| list.get(0)), "capital"),
        region: text_or_sentinel(raw.get("region"), "region"),
        subregion: text_or_sentinel(raw.get("subregion"), "subregion"),
        population: parse_population(raw.get("population")),
        area: parse_area(raw.get("area")),
        languages: languages(raw),
        currencies: currencies(raw),
    }
}

fn text_or_sentinel(value: Option<&Value>, field: &'static str) -> String {
    match value.and_then(Value::as_str) {
        Some(text) => text.to_string(),
        None => {
            trace!(field, "missing text field, using sentinel");
            SENTINEL.to_string()
        }
    }
}

/// Population is a count: whole, non-negative numbers only.
fn parse_population(value: Option<&Value>) -> Option<u64> {
    let value = value?;
    let parsed = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|number| *number >= 0.0 && number.fract() == 0.0 && *number < u64::MAX as f64)
            .map(|number| number as u64)
    });
    if parsed.is_none() {
        trace!(field = "population", "non-numeric population ignored");
    }
    parsed
}

fn parse_area(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|number| number.is_finite())
}

/// Display names from the `languages` map, in source order.
fn languages(raw: &Value) -> Vec<String> {
    raw.get("languages")
        .and_then(Value::as_object)
        .map(|map| {
            map.values()
                .filter_map(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The `name` of every entry in the `currencies` map, in source order.
fn currencies(raw: &Value) -> Vec<String> {
    raw.get("currencies")
        .and_then(Value::as_object)
        .map(|map| {
            map.values()
                .filter_map(|currency| currency.get("name").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
