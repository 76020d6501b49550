//! CLI argument definitions for the country atlas.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use atlas_ingest::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, FetchConfig};
use atlas_model::{Measure, TokenField};
use atlas_transform::MAX_BINS;

#[derive(Parser)]
#[command(
    name = "country-atlas",
    version,
    about = "Country Atlas - Fetch, normalize, and summarize country data",
    long_about = "Fetch country metadata from the REST Countries API, flatten it into a\n\
                  fixed-schema table, and summarize it by region, language, and currency.\n\n\
                  Chart-ready JSON and a CSV of the table can be exported for a dashboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Log how long spans such as the fetch took when they close.
    #[arg(long = "log-spans", global = true)]
    pub log_spans: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where country records come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Country data endpoint returning a JSON array.
    #[arg(long = "endpoint", value_name = "URL", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// HTTP request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Ignore proxy settings from the environment.
    #[arg(long = "no-proxy", global = true)]
    pub no_proxy: bool,

    /// Read records from a JSON file instead of the network.
    #[arg(long = "input", value_name = "FILE", global = true)]
    pub input: Option<PathBuf>,
}

impl SourceArgs {
    #[must_use]
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_timeout_secs(self.timeout_secs)
            .with_system_proxy(!self.no_proxy)
    }

    /// Human-readable description of the record source.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => self.endpoint.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized country table.
    Table {
        /// Show only the first N rows.
        #[arg(long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// Summarize countries by region.
    Regions {
        /// Sum a single measure and report missing values per region.
        #[arg(long = "measure", value_enum)]
        measure: Option<MeasureArg>,
    },

    /// Count languages or currencies across countries.
    Tokens {
        /// Multi-valued field to count.
        #[arg(long = "field", value_enum, default_value = "languages")]
        field: TokenFieldArg,

        /// Show only the N most frequent entries.
        #[arg(long = "top", value_name = "N")]
        top: Option<usize>,
    },

    /// Descriptive statistics for population and area.
    Describe,

    /// Write the table as CSV and every chart as JSON.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Histogram bin count (1 to 1000).
    #[arg(
        long = "bins",
        value_name = "N",
        default_value_t = atlas_transform::DEFAULT_BINS,
        value_parser = parse_bins
    )]
    pub bins: usize,
}

fn parse_bins(value: &str) -> Result<usize, String> {
    let bins: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a bin count"))?;
    if (1..=MAX_BINS).contains(&bins) {
        Ok(bins)
    } else {
        Err(format!("bin count must be between 1 and {MAX_BINS}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MeasureArg {
    Population,
    Area,
}

impl From<MeasureArg> for Measure {
    fn from(value: MeasureArg) -> Self {
        match value {
            MeasureArg::Population => Measure::Population,
            MeasureArg::Area => Measure::Area,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TokenFieldArg {
    Languages,
    Currencies,
}

impl From<TokenFieldArg> for TokenField {
    fn from(value: TokenFieldArg) -> Self {
        match value {
            TokenFieldArg::Languages => TokenField::Languages,
            TokenFieldArg::Currencies => TokenField::Currencies,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
