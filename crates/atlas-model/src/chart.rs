//! Chart-ready data structures.
//!
//! These carry exactly what a plotting front end needs (titles, axis
//! labels, points, bars) and serialize to plain JSON.

use serde::{Deserialize, Serialize};

use crate::views::HistogramBin;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    #[serde(default)]
    pub log_scale: bool,
}

impl Axis {
    #[must_use]
    pub fn linear(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            log_scale: false,
        }
    }

    #[must_use]
    pub fn log(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            log_scale: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bins: Vec<HistogramBin>,
}

/// Every chart of the country dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub population_area: ScatterChart,
    pub region_population: BarChart,
    pub region_area: BarChart,
    pub population_distribution: HistogramChart,
    pub area_distribution: HistogramChart,
    pub languages: BarChart,
    pub currencies: BarChart,
}
