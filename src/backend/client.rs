use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;

use super::types::{ElementsResponse, JourneyResponse};
use crate::core::form::JourneyQuery;
use crate::core::outcome::{JourneyOutcome, RouteSummary, display_value};
use crate::core::topology::LineTopology;

/// Errors from the topology fetch.
#[derive(Debug)]
pub enum BackendError {
    /// Request never completed (DNS, connection refused, reset).
    Network(String),
    /// Backend answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// The route-computation backend, as seen from the client.
#[async_trait]
pub trait JourneyBackend: Send + Sync {
    /// Fetches the stations of every line.
    async fn fetch_topology(&self) -> Result<LineTopology, BackendError>;

    /// Submits a journey query. Every failure is folded into the outcome.
    async fn plan_journey(&self, query: &JourneyQuery) -> JourneyOutcome;
}

/// HTTP/JSON implementation of `JourneyBackend`.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl JourneyBackend for HttpBackend {
    async fn fetch_topology(&self) -> Result<LineTopology, BackendError> {
        let url = format!("{}/get_elements", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ElementsResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        debug!("Elements: {:?}", body);

        body.into_topology()
            .ok_or_else(|| BackendError::Parse("response has no `elements` object".to_string()))
    }

    async fn plan_journey(&self, query: &JourneyQuery) -> JourneyOutcome {
        // POST to the origin root; `.json()` sets Content-Type: application/json
        let url = format!("{}/", self.base_url);
        debug!("POST {} {:?}", url, query);

        let response = match self.client.post(&url).json(query).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Journey request failed: {}", e);
                return JourneyOutcome::Network(e.to_string());
            }
        };

        let status = response.status();
        let body: JourneyResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Unreadable journey response (HTTP {}): {}", status, e);
                return JourneyOutcome::Network(e.to_string());
            }
        };
        debug!("Journey response (HTTP {}): {}", status, body.0);

        let outcome = classify(status, &body);
        info!("Journey query resolved: {:?}", outcome);
        outcome
    }
}

/// Decode a parsed journey response into its outcome.
///
/// On success status, a `res` key means a route; anything else is a domain
/// error carried in `error`.
fn classify(status: StatusCode, body: &JourneyResponse) -> JourneyOutcome {
    if status.is_success() {
        match body.res() {
            Some(res) => JourneyOutcome::Route(RouteSummary::from_value(res)),
            None => JourneyOutcome::Rejected(display_value(body.error())),
        }
    } else {
        JourneyOutcome::Transport {
            status: status.as_u16(),
            message: display_value(body.error()),
        }
    }
}
