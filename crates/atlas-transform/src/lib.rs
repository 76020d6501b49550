//! Country data pipeline: normalization, the dataset table, and the views
//! computed from it.

pub mod aggregate;
pub mod charts;
pub mod dataset;
pub mod frame;
pub mod normalize;
pub mod stats;

pub use aggregate::{region_summaries, sum_by_region, token_frequency};
pub use charts::{
    DEFAULT_BINS, dashboard, histogram_chart, population_area_scatter, region_bar, token_bar,
};
pub use dataset::{Dataset, load_dataset};
pub use frame::to_frame;
pub use normalize::normalize_record;
pub use stats::{MAX_BINS, describe, histogram};
