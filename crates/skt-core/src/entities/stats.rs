use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::SkillStatus;

/// Response of `GET /api/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub daily_streak: u32,
    pub weekly_hours: f64,
    pub monthly_hours: f64,
    /// Keyed by status label ("To Learn", ...).
    #[serde(default)]
    pub skill_counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}

impl Stats {
    /// Number of skills in `status`, zero when the backend omitted it.
    #[must_use]
    pub fn count_for(&self, status: SkillStatus) -> u32 {
        self.skill_counts.get(status.as_str()).copied().unwrap_or(0)
    }
}

/// One study log in the last seven days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    #[serde(with = "crate::dates::day")]
    pub date: NaiveDate,
    pub hours: f64,
    pub skills_count: u32,
}
