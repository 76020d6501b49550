use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use atlas_cli::cli::{ExportArgs, SourceArgs};
use atlas_cli::summary::{
    dataset_table, describe_table, region_summary_table, region_total_table, token_table,
};
use atlas_ingest::{FetchOutcome, fetch_or_empty, load_records_file};
use atlas_model::{Measure, TokenField};
use atlas_report::{ExportManifest, write_dashboard, write_dataset_csv, write_manifest};
use atlas_transform::{
    Dataset, dashboard, describe, load_dataset, region_summaries, sum_by_region, token_frequency,
};

/// The dataset for this run plus where it came from.
pub struct Session {
    pub dataset: Dataset,
    pub source: String,
    pub source_error: Option<String>,
}

/// Fetch (or read) the raw records once and build the dataset.
///
/// A failed source is not an error: the session holds an empty dataset.
pub fn load_session(source: &SourceArgs) -> Session {
    let start = Instant::now();
    let outcome = match &source.input {
        Some(path) => FetchOutcome::from_result(load_records_file(path)),
        None => fetch_or_empty(source.fetch_config()),
    };
    let dataset = load_dataset(&outcome);
    info!(
        rows = dataset.len(),
        source = %source.describe(),
        elapsed_ms = start.elapsed().as_millis(),
        "dataset ready"
    );
    if let Some(error) = &outcome.failure {
        eprintln!("warning: could not load country data: {error}");
    }
    Session {
        dataset,
        source: source.describe(),
        source_error: outcome.failure.map(|error| error.to_string()),
    }
}

pub fn run_table(session: &Session, limit: Option<usize>) {
    println!("Source: {}", session.source);
    println!("Countries: {}", session.dataset.len());
    println!("{}", dataset_table(&session.dataset, limit));
}

pub fn run_regions(session: &Session, measure: Option<Measure>) {
    match measure {
        Some(measure) => {
            let totals = sum_by_region(&session.dataset, measure);
            println!("{}", region_total_table(measure, &totals));
        }
        None => {
            let summaries = region_summaries(&session.dataset);
            println!("{}", region_summary_table(&summaries));
        }
    }
}

pub fn run_tokens(session: &Session, field: TokenField, top: Option<usize>) {
    let counts = token_frequency(&session.dataset, field);
    println!("{field}: {} distinct", counts.len());
    println!("{}", token_table(field, &counts, top));
}

pub fn run_describe(session: &Session) {
    let population = describe(&session.dataset, Measure::Population);
    let area = describe(&session.dataset, Measure::Area);
    println!("{}", describe_table(&population, &area));
}

pub fn run_export(session: &Session, args: &ExportArgs) -> Result<()> {
    let span = info_span!("export", output_dir = %args.output_dir.display());
    let _guard = span.enter();

    let charts = dashboard(&session.dataset, args.bins).context("build dashboard charts")?;
    let csv_path = args.output_dir.join("countries.csv");
    write_dataset_csv(&csv_path, &session.dataset)?;
    let mut files = vec![csv_path];
    files.extend(write_dashboard(&args.output_dir, &charts)?);

    let manifest = ExportManifest::new(&session.source, session.dataset.len())
        .with_source_error(session.source_error.clone())
        .with_files(files);
    let manifest_path = write_manifest(&args.output_dir, &manifest)?;
    if session.source_error.is_some() {
        warn!("exported an empty dataset because the source failed");
    }
    info!(files = manifest.files.len() + 1, "export complete");

    println!("Output: {}", args.output_dir.display());
    for file in &manifest.files {
        println!("  {}", file.display());
    }
    println!("  {}", manifest_path.display());
    Ok(())
}
