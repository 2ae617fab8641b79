use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::SkillStatus;

/// A named learning target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: SkillStatus,
    #[serde(
        default,
        with = "crate::dates::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "crate::dates::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

impl Skill {
    /// Request body carrying this skill's editable fields.
    #[must_use]
    pub fn draft(&self) -> SkillDraft {
        SkillDraft {
            name: self.name.clone(),
            category: self.category.clone().unwrap_or_default(),
            status: self.status,
        }
    }
}

/// Body for `POST /api/skills` and `PUT /api/skills/{id}`.
///
/// An empty `category` is stored as "no category" by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub status: SkillStatus,
}

/// Query filters for `GET /api/skills`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilters {
    pub category: Option<String>,
    pub status: Option<SkillStatus>,
}

impl SkillFilters {
    /// Query parameters in a stable order; blank categories are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}
