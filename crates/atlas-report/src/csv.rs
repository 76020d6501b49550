use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::debug;

use atlas_transform::{Dataset, to_frame};

use crate::charts::ensure_parent;

/// Write the country table as CSV. Missing numbers become empty cells.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    ensure_parent(path)?;
    let mut frame = to_frame(dataset).context("build country frame")?;
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = dataset.len(), "wrote country csv");
    Ok(())
}
