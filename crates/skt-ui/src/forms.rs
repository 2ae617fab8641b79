//! The two forms the client edits.

use skt_forms::{Field, FieldKind, Form, TimeFields};

pub mod skill {
    pub const FORM: &str = "skill-form";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const STATUS: &str = "status";
}

pub mod log {
    pub const FORM: &str = "log-form";
    pub const DATE: &str = "date";
    pub const HOURS: &str = "hours";
    pub const MINUTES: &str = "minutes";
    pub const SECONDS: &str = "seconds";
    pub const NOTES: &str = "notes";
    pub const SKILLS: &str = "skills";
}

pub const TIME_FIELDS: TimeFields<'static> = TimeFields {
    hours: log::HOURS,
    minutes: log::MINUTES,
    seconds: log::SECONDS,
};

#[must_use]
pub fn skill_form() -> Form {
    Form::new(skill::FORM)
        .with_field(Field::text(skill::NAME, "Skill Name *", FieldKind::SkillName).with_max_length(50))
        .with_field(Field::text(skill::CATEGORY, "Category", FieldKind::Plain).with_max_length(50))
        .with_field(
            Field::text(skill::STATUS, "Status", FieldKind::Plain)
                .with_default(skt_core::SkillStatus::default().as_str()),
        )
}

/// Hours, minutes and seconds are plain inputs; their sum is checked by the
/// study-time rule rather than per field.
#[must_use]
pub fn log_form() -> Form {
    Form::new(log::FORM)
        .with_field(Field::text(log::DATE, "Date *", FieldKind::Date))
        .with_field(Field::text(log::HOURS, "Hours", FieldKind::Plain))
        .with_field(Field::text(log::MINUTES, "Minutes", FieldKind::Plain))
        .with_field(Field::text(log::SECONDS, "Seconds", FieldKind::Plain))
        .with_field(Field::text(log::NOTES, "Notes", FieldKind::Plain).with_max_length(500))
        .with_field(Field::choices(log::SKILLS, "Skills *", FieldKind::Skills))
}

#[must_use]
pub fn is_time_field(id: &str) -> bool {
    [log::HOURS, log::MINUTES, log::SECONDS].contains(&id)
}
