//! # skt-api
//!
//! HTTP access façade for the Skilltrack REST backend.
//!
//! All outgoing calls go through [`ApiClient`], which:
//! - serializes request bodies and decodes JSON responses;
//! - turns transport failures, non-JSON bodies, and non-2xx statuses into a
//!   single [`RequestError`];
//! - reports each failure once to its [`ApiEvents`] sink;
//! - drives the shared loading indicator through an [`InFlightGate`].
//!
//! Typed endpoint groups:
//! - [`SkillsApi`]: `GET/POST /skills`, `PUT/DELETE /skills/{id}`
//! - [`LogsApi`]: `GET/POST /logs`, `DELETE /logs/{id}`
//! - [`ApiClient::stats`]: `GET /stats`

mod error;
mod gate;
mod http;
mod logs;
mod skills;
mod stats;
mod transport;

pub use error::RequestError;
pub use gate::{ApiEvents, InFlightGate, InFlightGuard, SilentEvents};
pub use http::{decode_response, with_query};
pub use logs::LogsApi;
pub use reqwest::Method;
pub use skills::SkillsApi;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

// ── Client ─────────────────────────────────────────────────────────

/// Entry point for every backend call.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    events: Arc<dyn ApiEvents>,
    gate: InFlightGate,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, events: Arc<dyn ApiEvents>) -> Self {
        Self {
            transport,
            events,
            gate: InFlightGate::new(),
        }
    }

    /// Client whose failures and loading transitions go nowhere.
    #[must_use]
    pub fn silent(transport: Arc<dyn Transport>) -> Self {
        Self::new(transport, Arc::new(SilentEvents))
    }

    /// Number of requests currently awaiting a response.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.gate.in_flight()
    }

    #[must_use]
    pub const fn skills(&self) -> SkillsApi<'_> {
        SkillsApi::new(self)
    }

    #[must_use]
    pub const fn logs(&self) -> LogsApi<'_> {
        LogsApi::new(self)
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the transport fails, the body is not
    /// JSON, or the status is outside 200..=299. The error has already been
    /// passed to [`ApiEvents::request_failed`].
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, RequestError> {
        self.call(method, endpoint, body).await
    }

    /// Like [`Self::request`], then deserialize the body into `T`.
    ///
    /// # Errors
    ///
    /// As [`Self::request`]; a payload that does not match `T` is a
    /// [`RequestError::Decode`].
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, RequestError> {
        self.call(method, endpoint, body).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, RequestError> {
        tracing::debug!(%method, endpoint, "api request");
        let result = self.exchange(method.clone(), endpoint, body).await.and_then(|value| {
            serde_json::from_value(value).map_err(|error| RequestError::decode(error.to_string()))
        });

        if let Err(error) = &result {
            tracing::warn!(%method, endpoint, %error, "api request failed");
            self.events.request_failed(error);
        }
        result
    }

    async fn exchange(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, RequestError> {
        let _guard = self.gate.acquire(self.events.as_ref());
        let response = self
            .transport
            .send(ApiRequest {
                method,
                path: endpoint.to_string(),
                body,
            })
            .await?;
        decode_response(&response)
    }
}
