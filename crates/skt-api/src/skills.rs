//! `/skills` endpoints.

use skt_core::{Skill, SkillDraft, SkillFilters};

use crate::{error::RequestError, http::with_query, ApiClient, Method};

/// Skill CRUD bound to a client.
#[derive(Clone, Copy)]
pub struct SkillsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SkillsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /skills` with optional `category` / `status` filters.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if the call fails or the payload is not a
    /// skill list.
    pub async fn list(self, filters: &SkillFilters) -> Result<Vec<Skill>, RequestError> {
        let path = with_query("/skills", &filters.query_pairs());
        self.client.request_json(Method::GET, &path, None).await
    }

    /// `POST /skills`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on failure, e.g. a 409 for a duplicate name.
    pub async fn create(self, draft: &SkillDraft) -> Result<Skill, RequestError> {
        let body = serde_json::to_value(draft).map_err(|e| RequestError::decode(e.to_string()))?;
        self.client
            .request_json(Method::POST, "/skills", Some(body))
            .await
    }

    /// `PUT /skills/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on failure.
    pub async fn update(self, id: i64, draft: &SkillDraft) -> Result<Skill, RequestError> {
        let body = serde_json::to_value(draft).map_err(|e| RequestError::decode(e.to_string()))?;
        self.client
            .request_json(Method::PUT, &format!("/skills/{id}"), Some(body))
            .await
    }

    /// `DELETE /skills/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on failure.
    pub async fn delete(self, id: i64) -> Result<(), RequestError> {
        self.client
            .request(Method::DELETE, &format!("/skills/{id}"), None)
            .await
            .map(drop)
    }
}
