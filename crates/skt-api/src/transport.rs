//! The network seam.
//!
//! [`ApiClient`](crate::ApiClient) talks to a [`Transport`] rather than to
//! `reqwest` directly so that flows can be exercised against an in-memory
//! backend. [`ReqwestTransport`] is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use skt_config::ApiConfig;

use crate::error::RequestError;

/// An outgoing call, relative to the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path with its query string, e.g. `/skills?status=Learned`.
    pub path: String,
    pub body: Option<Value>,
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one round-trip.
    ///
    /// Implementations return `Err` only when no response was obtained;
    /// non-success statuses are returned as responses.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError>;
}

/// `reqwest`-backed transport rooted at the configured base URL.
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] if the HTTP client fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .http
            .request(request.method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(ApiResponse { status, body })
    }
}
