//! Practicum homework API client
//!
//! One authenticated GET per poll. Transport failures and non-200 replies are
//! reported as distinct errors; the body is returned undecoded beyond JSON so
//! that shape checks stay in [`crate::response`].

use async_trait::async_trait;
use homework_common::{HomeworkError, Result, UnixTimestamp};
use homework_config::PracticumConfig;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

/// Source of homework status answers.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches the statuses of homeworks updated since `timestamp`.
    async fn get_api_answer(&self, timestamp: UnixTimestamp) -> Result<Value>;
}

/// HTTP client for the homework statuses endpoint
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a new client from configuration
    pub fn new(config: &PracticumConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HomeworkError::connection_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }

    /// The endpoint this client queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

fn transport_error(e: reqwest::Error) -> HomeworkError {
    if e.is_timeout() {
        warn!("Request timeout: {}", e);
    } else if e.is_connect() {
        warn!("Connection error: {}", e);
    } else {
        error!("Request failed: {}", e);
    }
    HomeworkError::connection_with_source(e.to_string(), e)
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn get_api_answer(&self, timestamp: UnixTimestamp) -> Result<Value> {
        debug!("Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Unexpected response status: {}", status);
            return Err(HomeworkError::unexpected_status(status.as_u16()));
        }

        info!("GET request completed successfully");

        let text = response.text().await.map_err(transport_error)?;
        debug!("Response body: {}", text);

        Ok(serde_json::from_str(&text)?)
    }
}
