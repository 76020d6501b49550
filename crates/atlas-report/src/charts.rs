use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use atlas_model::Dashboard;

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Write any serializable value as pretty JSON, creating parent folders.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("serialize {}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

/// Write each dashboard chart to its own file in `output_dir`.
pub fn write_dashboard(output_dir: &Path, dashboard: &Dashboard) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_context(|| format!("create {}", output_dir.display()))?;
    let mut outputs = Vec::with_capacity(7);
    write_chart(output_dir, "scatter.json", &dashboard.population_area, &mut outputs)?;
    write_chart(output_dir, "region_population.json", &dashboard.region_population, &mut outputs)?;
    write_chart(output_dir, "region_area.json", &dashboard.region_area, &mut outputs)?;
    write_chart(
        output_dir,
        "population_histogram.json",
        &dashboard.population_distribution,
        &mut outputs,
    )?;
    write_chart(output_dir, "area_histogram.json", &dashboard.area_distribution, &mut outputs)?;
    write_chart(output_dir, "languages.json", &dashboard.languages, &mut outputs)?;
    write_chart(output_dir, "currencies.json", &dashboard.currencies, &mut outputs)?;
    Ok(outputs)
}

fn write_chart<T: Serialize>(
    output_dir: &Path,
    file_name: &str,
    chart: &T,
    outputs: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = output_dir.join(file_name);
    write_json(&path, chart)?;
    outputs.push(path);
    Ok(())
}
