use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dates::DAY_FORMAT;
use crate::entities::Skill;

/// A dated record of study time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyLog {
    pub id: i64,
    #[serde(with = "crate::dates::day")]
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(
        default,
        with = "crate::dates::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

impl StudyLog {
    #[must_use]
    pub fn skill_ids(&self) -> Vec<i64> {
        self.skills.iter().map(|skill| skill.id).collect()
    }
}

/// Body for `POST /api/logs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStudyLog {
    #[serde(with = "crate::dates::day")]
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: String,
    pub skill_ids: Vec<i64>,
}

/// Query parameters for `GET /api/logs`.
///
/// The backend caps `limit` at 100 and defaults it to 50.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl LogQuery {
    #[must_use]
    pub fn latest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("date_from", from.format(DAY_FORMAT).to_string()));
        }
        if let Some(to) = self.date_to {
            pairs.push(("date_to", to.format(DAY_FORMAT).to_string()));
        }
        pairs
    }
}
