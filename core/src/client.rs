//! Stateless HTTP request builder and response parser for the journey API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`,
//! keeping the layer deterministic and free of I/O. The transport executes
//! the round-trip in between.

use crate::endpoint::{BOOK_JOURNEY, LIST_USERS, SUBMIT_FEATURE};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{BookJourneyRequest, FeatureRequest, FeatureResponse, UsersResponse};

/// Stateless client for the journey API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_submit_feature(&self, input: &FeatureRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(SUBMIT_FEATURE.json_request(&self.base_url, body))
    }

    pub fn build_book_journey(&self, input: &BookJourneyRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(BOOK_JOURNEY.json_request(&self.base_url, body))
    }

    pub fn build_list_users(&self) -> HttpRequest {
        LIST_USERS.request(&self.base_url)
    }

    pub fn parse_submit_feature(&self, response: HttpResponse) -> Result<FeatureResponse, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The booking endpoint fixes no response schema, so a success here
    /// hands the raw response back to the caller untouched.
    pub fn parse_book_journey(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Http {
                status: response.status,
                body: response.body,
            })
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<UsersResponse, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map any status other than the contract's expected one to `ApiError::Http`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
