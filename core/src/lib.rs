//! Layered client library for the journey API.
//!
//! # Overview
//! Four layers, data flowing through one request cycle:
//!
//! - `types` + `endpoint`: the wire contracts — typed payloads and the
//!   declarative (verb, path) table.
//! - `client`: builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network.
//! - `transport` + `api`: executes exchanges asynchronously and exposes
//!   one façade method per endpoint, normalizing failures into
//!   `RequestError` with the category preserved.
//! - `controller`: the `Idle -> Loading -> Succeeded | Failed` state
//!   machine presentation code subscribes to.
//!
//! # Design
//! - The I/O boundary is explicit: everything below `transport` is
//!   deterministic plain data, testable without a socket.
//! - DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.
//! - Controllers are plain owned values: constructed, subscribed to, and
//!   dropped by their owner.

pub mod api;
pub mod client;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::{JourneyApi, JourneyApiBuilder};
pub use client::ApiClient;
pub use controller::{Failure, RequestController, RequestState};
pub use endpoint::Endpoint;
pub use error::{ApiError, ErrorKind, RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    BookJourneyRequest, FeatureRequest, FeatureResponse, Passenger, User, UsersResponse,
};
