//! Normalized country rows and the fixed table schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback value for text fields missing from the source record.
pub const SENTINEL: &str = "N/A";

/// Separator used when multi-valued fields are shown as a single cell.
pub const TOKEN_SEPARATOR: &str = ", ";

/// Columns of the country table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Capital,
    Region,
    Subregion,
    Population,
    Area,
    Languages,
    Currencies,
}

impl Column {
    /// Every column of the schema, in order.
    pub const ALL: [Column; 8] = [
        Column::Name,
        Column::Capital,
        Column::Region,
        Column::Subregion,
        Column::Population,
        Column::Area,
        Column::Languages,
        Column::Currencies,
    ];

    /// Header label used in tables and exported files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Capital => "Capital",
            Self::Region => "Region",
            Self::Subregion => "Subregion",
            Self::Population => "Population",
            Self::Area => "Area",
            Self::Languages => "Languages",
            Self::Currencies => "Currencies",
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Population | Self::Area)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One country after normalization.
///
/// Text fields always hold a value (the source value or [`SENTINEL`]).
/// Numeric fields are `None` when the source did not provide a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub languages: Vec<String>,
    pub currencies: Vec<String>,
}

impl Default for CountryRecord {
    fn default() -> Self {
        Self {
            name: SENTINEL.to_string(),
            capital: SENTINEL.to_string(),
            region: SENTINEL.to_string(),
            subregion: SENTINEL.to_string(),
            population: None,
            area: None,
            languages: Vec::new(),
            currencies: Vec::new(),
        }
    }
}

impl CountryRecord {
    /// Languages joined for display, empty when none are listed.
    #[must_use]
    pub fn languages_display(&self) -> String {
        self.languages.join(TOKEN_SEPARATOR)
    }

    /// Currency names joined for display, empty when none are listed.
    #[must_use]
    pub fn currencies_display(&self) -> String {
        self.currencies.join(TOKEN_SEPARATOR)
    }

    /// Display string for a single column.
    ///
    /// Missing numeric values render as [`SENTINEL`].
    #[must_use]
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone(),
            Column::Capital => self.capital.clone(),
            Column::Region => self.region.clone(),
            Column::Subregion => self.subregion.clone(),
            Column::Population => self
                .population
                .map_or_else(|| SENTINEL.to_string(), |value| value.to_string()),
            Column::Area => self
                .area
                .map_or_else(|| SENTINEL.to_string(), format_numeric),
            Column::Languages => self.languages_display(),
            Column::Currencies => self.currencies_display(),
        }
    }
}

/// Formats a float without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Splits a joined display string back into its tokens.
///
/// An empty string has no tokens.
pub fn split_tokens(display: &str) -> impl Iterator<Item = &str> {
    display
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_all_sentinel() {
        let record = CountryRecord::default();
        for column in Column::ALL {
            let cell = record.cell(column);
            if matches!(column, Column::Languages | Column::Currencies) {
                assert_eq!(cell, "");
            } else {
                assert_eq!(cell, SENTINEL, "column {column}");
            }
        }
    }

    #[test]
    fn numeric_cells_format_cleanly() {
        let record = CountryRecord {
            population: Some(100),
            area: Some(50.5),
            ..CountryRecord::default()
        };
        assert_eq!(record.cell(Column::Population), "100");
        assert_eq!(record.cell(Column::Area), "50.5");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(0.25), "0.25");
    }

    #[test]
    fn split_tokens_skips_empty_input() {
        assert_eq!(split_tokens("").count(), 0);
        let tokens: Vec<&str> = split_tokens("English, French").collect();
        assert_eq!(tokens, vec!["English", "French"]);
    }

    #[test]
    fn column_labels_follow_schema_order() {
        let labels: Vec<&str> = Column::ALL.iter().map(|column| column.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Capital",
                "Region",
                "Subregion",
                "Population",
                "Area",
                "Languages",
                "Currencies"
            ]
        );
        assert!(Column::Area.is_numeric());
        assert!(!Column::Region.is_numeric());
    }
}
