//! Result types for aggregations and descriptive statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{Column, CountryRecord};

/// Numeric field that can be summed or described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Population,
    Area,
}

impl Measure {
    pub const ALL: [Measure; 2] = [Measure::Population, Measure::Area];

    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Population => Column::Population,
            Self::Area => Column::Area,
        }
    }

    /// Value of this measure for one record, `None` when missing.
    #[must_use]
    pub fn value(self, record: &CountryRecord) -> Option<f64> {
        match self {
            Self::Population => record.population.map(|value| value as f64),
            Self::Area => record.area,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column().label())
    }
}

/// Multi-valued field whose tokens can be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenField {
    Languages,
    Currencies,
}

impl TokenField {
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Languages => Column::Languages,
            Self::Currencies => Column::Currencies,
        }
    }
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column().label())
    }
}

/// Sum of one measure over the rows of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotal {
    pub region: String,
    pub total: f64,
    /// Rows that contributed a value.
    pub counted: usize,
    /// Rows whose value was missing and contributed zero.
    pub missing: usize,
}

/// Row count and both measure totals for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: String,
    pub countries: usize,
    pub population: f64,
    pub area: f64,
}

/// Occurrences of one language or currency across the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Descriptive statistics of a measure.
///
/// All statistics are `None` when no row has a value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Describe {
    pub count: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation; needs at least two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width bins over the observed range of a measure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}
