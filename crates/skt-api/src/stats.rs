//! `/stats` endpoint.

use skt_core::Stats;

use crate::{error::RequestError, ApiClient, Method};

impl ApiClient {
    /// `GET /stats`: streak, weekly/monthly hours, status counts, and the
    /// last seven days of activity.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the call fails or the payload does not
    /// match [`Stats`].
    pub async fn stats(&self) -> Result<Stats, RequestError> {
        self.request_json(Method::GET, "/stats", None).await
    }
}
