//! Raw country record ingestion.
//!
//! Records come either from the REST Countries API or from a JSON file
//! holding the same array. Every failure is absorbed here: callers get a
//! [`FetchOutcome`] whose record list is empty when the source failed.

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::{CountriesClient, fetch_or_empty};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, FetchConfig};
pub use error::{IngestError, Result};
pub use source::{FetchOutcome, load_records_file, parse_records};
