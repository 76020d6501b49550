//! REST Countries API client.
//!
//! Issues a single GET against the configured endpoint and hands back the
//! raw JSON records. No retries and no caching: one call, one response.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info, info_span};

use crate::config::FetchConfig;
use crate::error::{IngestError, Result};
use crate::source::{FetchOutcome, parse_records};

/// Client for a country-data endpoint.
pub struct CountriesClient {
    /// HTTP client.
    client: Client,
    config: FetchConfig,
}

impl CountriesClient {
    /// Create a client for the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Fetch every country record from the endpoint.
    pub fn fetch(&self) -> Result<Vec<Value>> {
        let span = info_span!("fetch", endpoint = %self.config.endpoint);
        let _guard = span.enter();

        debug!("requesting country records");
        let response = self
            .client
            .get(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let records = parse_records(&body)?;
        info!(records = records.len(), "fetched country records");
        Ok(records)
    }

    /// Fetch records, substituting an empty sequence on any failure.
    #[must_use]
    pub fn fetch_or_empty(&self) -> FetchOutcome {
        FetchOutcome::from_result(self.fetch())
    }
}

/// Fetch with a one-off client; a client that cannot be built counts as a
/// failed fetch.
#[must_use]
pub fn fetch_or_empty(config: FetchConfig) -> FetchOutcome {
    match CountriesClient::new(config) {
        Ok(client) => client.fetch_or_empty(),
        Err(error) => FetchOutcome::failed(error),
    }
}
