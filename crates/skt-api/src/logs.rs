//! `/logs` endpoints. Study logs are immutable once created.

use skt_core::{LogQuery, NewStudyLog, StudyLog};

use crate::{error::RequestError, http::with_query, ApiClient, Method};

#[derive(Clone, Copy)]
pub struct LogsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LogsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /logs`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the call fails or the payload is not a
    /// log list.
    pub async fn list(self, query: &LogQuery) -> Result<Vec<StudyLog>, RequestError> {
        let path = with_query("/logs", &query.query_pairs());
        self.client.request_json(Method::GET, &path, None).await
    }

    /// `POST /logs`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on failure, e.g. a 404 for unknown skill ids.
    pub async fn create(self, log: &NewStudyLog) -> Result<StudyLog, RequestError> {
        let body = serde_json::to_value(log).map_err(|e| RequestError::decode(e.to_string()))?;
        self.client
            .request_json(Method::POST, "/logs", Some(body))
            .await
    }

    /// `DELETE /logs/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on failure.
    pub async fn delete(self, id: i64) -> Result<(), RequestError> {
        self.client
            .request(Method::DELETE, &format!("/logs/{id}"), None)
            .await
            .map(drop)
    }
}
