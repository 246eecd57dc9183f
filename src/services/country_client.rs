//! Countries API client.
//!
//! `CountrySource` is the seam between the state machine and the network;
//! `RestCountriesClient` is the `reqwest` implementation used by the
//! front-ends.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, info};

use crate::types::country::Country;
use crate::types::errors::{AppError, FetchError};
use crate::types::settings::ApiSettings;

/// Anything that can produce the full country list.
pub trait CountrySource {
    fn fetch_countries(&self) -> impl Future<Output = Result<Vec<Country>, FetchError>> + Send;
}

/// HTTP client for the REST Countries `all` endpoint.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    base_url: String,
    fields: String,
}

impl RestCountriesClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            fields: ApiSettings::fields_param(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CountrySource for RestCountriesClient {
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        debug!(url = %self.base_url, fields = %self.fields, "requesting countries");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("fields", self.fields.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let countries = parse_countries(&body)?;
        info!(count = countries.len(), "countries received");
        Ok(countries)
    }
}

/// Decodes a response body into country records, in response order.
pub fn parse_countries(body: &[u8]) -> Result<Vec<Country>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))
}
