//! Access façade over the client and transport layers.
//!
//! # Design
//! `JourneyApi` exposes one async method per endpoint. Each method is a
//! pass-through: build the request, execute it, parse the response. No
//! retries, no caching, no validation beyond what the model layer already
//! enforces. Every failure is normalized into [`RequestError`] with its
//! category intact, so callers can still distinguish a dead network from
//! a broken contract.

use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::http::HttpResponse;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{BookJourneyRequest, FeatureRequest, FeatureResponse, UsersResponse};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Builder used to assemble a [`JourneyApi`] instance.
#[derive(Debug, Clone, Default)]
pub struct JourneyApiBuilder {
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl JourneyApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given base URL instead of the default.
    pub fn with_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a pre-configured `reqwest::Client` for the default transport.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Consume the builder, filling unset values with their defaults.
    pub fn build(mut self) -> JourneyApi {
        let base_url = self
            .base_url
            .take()
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        let transport = match self.http_client.take() {
            Some(client) => ReqwestTransport::with_client(client),
            None => ReqwestTransport::new(),
        };
        JourneyApi::with_transport(&base_url, transport)
    }
}

/// The app-facing API surface: one call per endpoint.
#[derive(Debug, Clone)]
pub struct JourneyApi<T: Transport = ReqwestTransport> {
    client: ApiClient,
    transport: T,
}

impl JourneyApi<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> JourneyApi<T> {
    /// Construct with a custom transport (tests, recorded exchanges).
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: ApiClient::new(base_url),
            transport,
        }
    }

    pub async fn submit_feature(
        &self,
        input: &FeatureRequest,
    ) -> Result<FeatureResponse, RequestError> {
        debug!(endpoint = "POST /new-endpoint", "submitting feature");
        let request = self.client.build_submit_feature(input)?;
        let response = self.transport.execute(request).await?;
        match self.client.parse_submit_feature(response) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                warn!(error = %err, "feature submission failed");
                Err(err.into())
            }
        }
    }

    /// Book a journey. The endpoint promises no response schema, so the
    /// raw response is returned on success.
    pub async fn book_journey(
        &self,
        input: &BookJourneyRequest,
    ) -> Result<HttpResponse, RequestError> {
        debug!(endpoint = "POST /user/book-journey", journey_id = %input.journey_id, "booking journey");
        let request = self.client.build_book_journey(input)?;
        let response = self.transport.execute(request).await?;
        match self.client.parse_book_journey(response) {
            Ok(raw) => Ok(raw),
            Err(err) => {
                warn!(error = %err, "journey booking failed");
                Err(err.into())
            }
        }
    }

    pub async fn list_users(&self) -> Result<UsersResponse, RequestError> {
        debug!(endpoint = "GET /users", "listing users");
        let request = self.client.build_list_users();
        let response = self.transport.execute(request).await?;
        match self.client.parse_list_users(response) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                warn!(error = %err, "user listing failed");
                Err(err.into())
            }
        }
    }
}
