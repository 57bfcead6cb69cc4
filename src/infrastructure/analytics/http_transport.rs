//! HTTP analytics transport posting events as JSON.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{AnalyticsTransport, TransportError, TransportResult};
use crate::domain::telemetry_event::TelemetryEvent;

/// Transport delivering events via `POST` to a fixed analytics endpoint.
///
/// Each event is sent as a JSON body with an `application/json` content type.
/// The response body is never read; only a non-success status is reported,
/// and the worker discards even that. A short request timeout bounds how long
/// a single delivery can occupy the worker.
#[derive(Debug)]
pub struct HttpAnalyticsTransport {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpAnalyticsTransport {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a transport for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] when the URL does not parse or the
    /// HTTP client cannot be constructed.
    pub fn new(endpoint: &str) -> TransportResult<Self> {
        let endpoint =
            reqwest::Url::parse(endpoint).map_err(|e| TransportError::Client(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AnalyticsTransport for HttpAnalyticsTransport {
    async fn send(&self, event: &TelemetryEvent) -> TransportResult<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(event)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        // Reachability only; any HTTP status from the endpoint counts.
        self.client.head(self.endpoint.clone()).send().await.is_ok()
    }
}
