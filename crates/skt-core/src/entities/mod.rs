//! Entity structs for the resources served by the skill-tracking backend.
//!
//! All structs derive `Serialize` and `Deserialize` so they can be decoded
//! from API responses and re-emitted by the CLI's output formats.

mod skill;
mod stats;
mod study_log;

pub use skill::{Skill, SkillDraft, SkillFilters};
pub use stats::{ActivityEntry, Stats};
pub use study_log::{LogQuery, NewStudyLog, StudyLog};
