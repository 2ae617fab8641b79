//! Skill status and theme enums.
//!
//! `SkillStatus` serializes with the backend's human-readable labels
//! ("To Learn", "In Progress", "Learned"); `Theme` uses lowercase names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SkillStatus
// ---------------------------------------------------------------------------

/// Learning progress of a skill.
///
/// ```text
/// To Learn → In Progress → Learned
/// ```
///
/// The backend accepts any of the three on update, so no transition rules
/// are enforced client-side.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillStatus {
    #[default]
    #[serde(rename = "To Learn")]
    ToLearn,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Learned")]
    Learned,
}

impl SkillStatus {
    pub const ALL: [Self; 3] = [Self::ToLearn, Self::InProgress, Self::Learned];

    /// Label used on the wire and in the UI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToLearn => "To Learn",
            Self::InProgress => "In Progress",
            Self::Learned => "Learned",
        }
    }

    /// Stable kebab-case token, used for CLI arguments.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ToLearn => "to-learn",
            Self::InProgress => "in-progress",
            Self::Learned => "learned",
        }
    }
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillStatus {
    type Err = CoreError;

    /// Accepts the wire label as well as slug / snake_case spellings,
    /// case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "tolearn" => Ok(Self::ToLearn),
            "inprogress" => Ok(Self::InProgress),
            "learned" => Ok(Self::Learned),
            _ => Err(CoreError::InvalidStatus(raw.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(CoreError::InvalidTheme(raw.to_string())),
        }
    }
}
