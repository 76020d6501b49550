//! Descriptive statistics and histograms for numeric columns.

use atlas_model::{AtlasError, Describe, Histogram, HistogramBin, Measure, Result};

use crate::dataset::Dataset;

/// Present values of a measure, sorted ascending.
fn sorted_values(dataset: &Dataset, measure: Measure) -> Vec<f64> {
    let mut values: Vec<f64> = dataset
        .rows()
        .iter()
        .filter_map(|row| measure.value(row))
        .collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Quantile by linear interpolation between the closest ranks.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Count, mean, spread and quartiles of a measure.
#[must_use]
pub fn describe(dataset: &Dataset, measure: Measure) -> Describe {
    let values = sorted_values(dataset, measure);
    let count = values.len();
    let missing = dataset.len() - count;
    if count == 0 {
        return Describe {
            missing,
            ..Describe::default()
        };
    }
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    });
    Describe {
        count,
        missing,
        mean: Some(mean),
        std,
        min: values.first().copied(),
        p25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        p75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

/// Upper bound on histogram bins.
pub const MAX_BINS: usize = 1000;

/// Equal-width histogram over the observed range of a measure.
///
/// The last bin is closed on the right so the maximum is counted. When all
/// values are equal they fall into a single bin.
pub fn histogram(dataset: &Dataset, measure: Measure, bins: usize) -> Result<Histogram> {
    if bins == 0 || bins > MAX_BINS {
        return Err(AtlasError::InvalidBinCount {
            bins,
            max: MAX_BINS,
        });
    }
    let values = sorted_values(dataset, measure);
    let (Some(&min), Some(&max)) = (values.first(), values.last()) else {
        return Ok(Histogram::default());
    };
    if min == max {
        return Ok(Histogram {
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: values.len(),
            }],
        });
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let filled = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: min + idx as f64 * width,
            upper: if idx + 1 == bins {
                max
            } else {
                min + (idx + 1) as f64 * width
            },
            count,
        })
        .collect();
    Ok(Histogram { bins: filled })
}
