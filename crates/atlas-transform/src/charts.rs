//! Chart data builders.
//!
//! Plain functions from a [`Dataset`] to chart-ready structures. Choosing
//! when to rebuild a chart is left to whatever front end consumes them.

use atlas_model::{
    Axis, Bar, BarChart, Dashboard, HistogramChart, Measure, Result, ScatterChart, ScatterPoint,
    TokenField,
};

use crate::aggregate::{sum_by_region, token_frequency};
use crate::dataset::Dataset;
use crate::stats::histogram;

/// Histogram bin count used by the dashboard.
pub const DEFAULT_BINS: usize = 30;

fn measure_label(measure: Measure) -> &'static str {
    match measure {
        Measure::Population => "Population",
        Measure::Area => "Area (km²)",
    }
}

/// Population against area, both on logarithmic axes.
///
/// Rows missing either value, or with a value that is not positive, have
/// no place on a log scale and are left out.
#[must_use]
pub fn population_area_scatter(dataset: &Dataset) -> ScatterChart {
    let points = dataset
        .rows()
        .iter()
        .filter_map(|row| {
            let x = Measure::Area.value(row)?;
            let y = Measure::Population.value(row)?;
            (x > 0.0 && y > 0.0).then(|| ScatterPoint {
                label: row.name.clone(),
                x,
                y,
            })
        })
        .collect();
    ScatterChart {
        title: "Population vs Area".to_string(),
        x_axis: Axis::log(measure_label(Measure::Area)),
        y_axis: Axis::log(measure_label(Measure::Population)),
        points,
    }
}

/// Bar per region with the summed measure.
#[must_use]
pub fn region_bar(dataset: &Dataset, measure: Measure) -> BarChart {
    let title = match measure {
        Measure::Population => "Total Population by Region",
        Measure::Area => "Total Area by Region",
    };
    let bars = sum_by_region(dataset, measure)
        .into_iter()
        .map(|entry| Bar {
            label: entry.region,
            value: entry.total,
        })
        .collect();
    BarChart {
        title: title.to_string(),
        x_axis: Axis::linear("Region"),
        y_axis: Axis::linear(measure_label(measure)),
        bars,
    }
}

/// Bar per language or currency with the number of countries using it.
///
/// `top` keeps only the most frequent tokens.
#[must_use]
pub fn token_bar(dataset: &Dataset, field: TokenField, top: Option<usize>) -> BarChart {
    let counts = token_frequency(dataset, field);
    let limit = top.unwrap_or(counts.len());
    let bars = counts
        .into_iter()
        .take(limit)
        .map(|entry| Bar {
            label: entry.token,
            value: entry.count as f64,
        })
        .collect();
    let (title, label) = match field {
        TokenField::Languages => ("Languages", "Language"),
        TokenField::Currencies => ("Currencies", "Currency"),
    };
    BarChart {
        title: title.to_string(),
        x_axis: Axis::linear(label),
        y_axis: Axis::linear("Countries"),
        bars,
    }
}

pub fn histogram_chart(dataset: &Dataset, measure: Measure, bins: usize) -> Result<HistogramChart> {
    let title = match measure {
        Measure::Population => "Population Distribution",
        Measure::Area => "Area Distribution",
    };
    Ok(HistogramChart {
        title: title.to_string(),
        x_axis: Axis::linear(measure_label(measure)),
        y_axis: Axis::linear("Frequency"),
        bins: histogram(dataset, measure, bins)?.bins,
    })
}

/// Every dashboard chart for one dataset.
pub fn dashboard(dataset: &Dataset, bins: usize) -> Result<Dashboard> {
    Ok(Dashboard {
        population_area: population_area_scatter(dataset),
        region_population: region_bar(dataset, Measure::Population),
        region_area: region_bar(dataset, Measure::Area),
        population_distribution: histogram_chart(dataset, Measure::Population, bins)?,
        area_distribution: histogram_chart(dataset, Measure::Area, bins)?,
        languages: token_bar(dataset, TokenField::Languages, None),
        currencies: token_bar(dataset, TokenField::Currencies, None),
    })
}
