//! # skt-core
//!
//! View-model types, status enums, and error types for Skilltrack.
//!
//! Everything here mirrors a resource served by the skill-tracking REST
//! backend. Nothing in this crate is persisted by the client: values are
//! fetched, rendered, and dropped.
//! - Entity structs (skills, study logs, statistics) and request bodies
//! - The closed `SkillStatus` set and the `Theme` preference
//! - Lenient date parsing for server payloads
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{
    ActivityEntry, LogQuery, NewStudyLog, Skill, SkillDraft, SkillFilters, Stats, StudyLog,
};
pub use enums::{SkillStatus, Theme};
pub use errors::CoreError;
