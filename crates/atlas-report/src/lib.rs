//! Country atlas output generation.
//!
//! - **CSV**: the normalized country table
//! - **Chart JSON**: one file per dashboard chart
//! - **Manifest**: what was written, from which source, and when

mod charts;
mod csv;
mod manifest;

pub use charts::{write_dashboard, write_json};
pub use csv::write_dataset_csv;
pub use manifest::{ExportManifest, write_manifest};
