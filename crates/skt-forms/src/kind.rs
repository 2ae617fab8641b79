//! Field kinds and their rules.
//!
//! Every validated input declares one [`FieldKind`]. The set is closed: each
//! kind maps to exactly one static [`FieldRule`] (or none for
//! [`FieldKind::Plain`]), and evaluation matches exhaustively on [`Check`].

use serde::Serialize;

/// Validation category of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Skill name, 3-50 characters.
    SkillName,
    /// Calendar day, not after today.
    Date,
    /// Single decimal-hours value between 0.1 and 24.
    Hours,
    /// Checkbox group of skills, at least one checked.
    Skills,
    /// No rule; always valid.
    Plain,
}

/// What a rule checks once the required/empty question is settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Character count bounds, inclusive.
    Length { min: usize, max: usize },
    /// Numeric bounds, inclusive; unparseable input fails.
    Range { min: f64, max: f64 },
    /// Day must not be after today.
    NotFuture,
    /// Minimum number of checked boxes in a group.
    MinSelected(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub required: bool,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    /// Minimum trimmed length for the submit gate: the length floor when
    /// there is one, otherwise "non-empty".
    #[must_use]
    pub const fn min_chars(&self) -> usize {
        match self.check {
            Check::Length { min, .. } if min > 0 => min,
            _ => 1,
        }
    }

    /// Minimum checked boxes when the rule is applied to a checkbox group.
    #[must_use]
    pub const fn min_selected(&self) -> usize {
        match self.check {
            Check::MinSelected(min) if min > 0 => min,
            _ => 1,
        }
    }
}

pub const SKILL_NAME_RULE: FieldRule = FieldRule {
    required: true,
    check: Check::Length { min: 3, max: 50 },
    message: "Skill name must be 3-50 characters",
};

pub const DATE_RULE: FieldRule = FieldRule {
    required: true,
    check: Check::NotFuture,
    message: "Date cannot be in the future",
};

pub const HOURS_RULE: FieldRule = FieldRule {
    required: true,
    check: Check::Range { min: 0.1, max: 24.0 },
    message: "Study hours must be between 0.1 and 24",
};

pub const SKILLS_RULE: FieldRule = FieldRule {
    required: true,
    check: Check::MinSelected(1),
    message: "Please select at least one skill",
};

impl FieldKind {
    #[must_use]
    pub const fn rule(self) -> Option<&'static FieldRule> {
        match self {
            Self::SkillName => Some(&SKILL_NAME_RULE),
            Self::Date => Some(&DATE_RULE),
            Self::Hours => Some(&HOURS_RULE),
            Self::Skills => Some(&SKILLS_RULE),
            Self::Plain => None,
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        match self.rule() {
            Some(rule) => rule.required,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_has_no_rule() {
        assert!(FieldKind::Plain.rule().is_none());
        assert!(!FieldKind::Plain.is_required());
    }

    #[test]
    fn every_ruled_kind_is_required() {
        for kind in [
            FieldKind::SkillName,
            FieldKind::Date,
            FieldKind::Hours,
            FieldKind::Skills,
        ] {
            assert!(kind.is_required(), "{kind:?}");
        }
    }

    #[test]
    fn gate_minimums() {
        assert_eq!(SKILL_NAME_RULE.min_chars(), 3);
        assert_eq!(DATE_RULE.min_chars(), 1);
        assert_eq!(SKILLS_RULE.min_selected(), 1);
        assert_eq!(HOURS_RULE.min_selected(), 1);
    }
}
