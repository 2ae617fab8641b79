//! Rule evaluation, submit gating, and the cross-field study-time check.

use chrono::NaiveDate;
use serde::Serialize;
use skt_core::dates::parse_day;

use crate::counter::CharCounter;
use crate::error::ValidationError;
use crate::field::{Field, FieldInput, FieldState, FieldStatus};
use crate::form::Form;
use crate::kind::{Check, FieldKind, FieldRule};

pub const TIME_TOO_SHORT: &str = "Study time must be at least 0.1 hours (6 minutes)";
pub const TIME_TOO_LONG: &str = "Study time cannot exceed 24 hours";
pub const MIN_STUDY_HOURS: f64 = 0.1;
pub const MAX_STUDY_HOURS: f64 = 24.0;

const FILL_IN_ALL: &str = "Please fill in all required fields";

/// Enabled/disabled state of a form's submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitState {
    pub enabled: bool,
    /// Present only while disabled.
    pub tooltip: Option<String>,
}

/// Ids of the split study-time inputs.
#[derive(Debug, Clone, Copy)]
pub struct TimeFields<'a> {
    pub hours: &'a str,
    pub minutes: &'a str,
    pub seconds: &'a str,
}

/// Outcome of [`FormValidator::validate_form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub valid: bool,
    /// Per-field results in declaration order.
    pub fields: Vec<(String, FieldState)>,
}

impl FormReport {
    /// Labels of the failing fields.
    #[must_use]
    pub fn invalid_labels(&self, form: &Form) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(_, state)| !state.valid)
            .filter_map(|(id, _)| form.field(id))
            .map(|f| f.plain_label().to_string())
            .collect()
    }

    /// Convert a failing report into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFields`] when any field failed.
    pub fn into_result(self, form: &Form) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidFields {
                fields: self.invalid_labels(form),
            })
        }
    }
}

/// Stateless rule evaluator with an injectable notion of "today".
#[derive(Debug, Clone, Copy)]
pub struct FormValidator {
    today: fn() -> NaiveDate,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self {
            today: local_today,
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl FormValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator whose date rule compares against `today()`.
    #[must_use]
    pub const fn with_today(today: fn() -> NaiveDate) -> Self {
        Self { today }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    // ── Per field ──────────────────────────────────────────────────

    /// Evaluate one field from scratch.
    #[must_use]
    pub fn validate_field(&self, field: &Field) -> FieldState {
        let Some(rule) = field.kind.rule() else {
            return FieldState::neutral();
        };
        match &field.input {
            FieldInput::Choices(choices) => {
                let checked = choices.iter().filter(|c| c.checked).count();
                if checked >= rule.min_selected() {
                    FieldState::valid()
                } else {
                    FieldState::invalid(rule.message)
                }
            }
            FieldInput::Text(raw) => self.check_text(rule, raw.trim()),
        }
    }

    fn check_text(&self, rule: &FieldRule, value: &str) -> FieldState {
        if value.is_empty() {
            return if rule.required {
                FieldState::invalid(rule.message)
            } else {
                FieldState::neutral()
            };
        }
        let passes = match rule.check {
            Check::Length { min, max } => (min..=max).contains(&value.chars().count()),
            Check::Range { min, max } => value
                .parse::<f64>()
                .is_ok_and(|n| n.is_finite() && n >= min && n <= max),
            Check::NotFuture => parse_day(value).is_ok_and(|day| day <= self.today()),
            // Text never satisfies a selection rule.
            Check::MinSelected(_) => false,
        };
        if passes {
            FieldState::valid()
        } else {
            FieldState::invalid(rule.message)
        }
    }

    /// Evaluate the field `id` and record its status on the form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] if no field has this id.
    pub fn validate_field_in(
        &self,
        form: &mut Form,
        id: &str,
    ) -> Result<FieldState, ValidationError> {
        let field = form.field_mut(id)?;
        let state = self.validate_field(field);
        field.status = state.status();
        tracing::trace!(field = id, valid = state.valid, "field validated");
        Ok(state)
    }

    // ── Whole form ─────────────────────────────────────────────────

    /// Evaluate every field. The study-time check is not included.
    pub fn validate_form(&self, form: &mut Form) -> FormReport {
        let mut fields = Vec::with_capacity(form.fields().len());
        for field in form.fields_mut() {
            let state = self.validate_field(field);
            field.status = state.status();
            fields.push((field.id.clone(), state));
        }
        FormReport {
            valid: fields.iter().all(|(_, state)| state.valid),
            fields,
        }
    }

    /// Minimal satisfaction of the required fields, independent of the
    /// full rules.
    #[must_use]
    pub fn submit_state(&self, form: &Form) -> SubmitState {
        let mut missing: Vec<String> = Vec::new();
        let mut unnamed = false;

        for field in form.fields() {
            let Some(rule) = field.kind.rule().filter(|r| r.required) else {
                continue;
            };
            let satisfied = match &field.input {
                FieldInput::Choices(choices) => choices.iter().any(|c| c.checked),
                FieldInput::Text(raw) => raw.trim().chars().count() >= rule.min_chars(),
            };
            if satisfied {
                continue;
            }
            let label = match (&field.input, field.kind) {
                (FieldInput::Choices(_), FieldKind::Skills) => "at least one skill".to_string(),
                _ => field.plain_label().to_string(),
            };
            if label.is_empty() {
                unnamed = true;
            } else {
                missing.push(label);
            }
        }

        if missing.is_empty() && !unnamed {
            return SubmitState {
                enabled: true,
                tooltip: None,
            };
        }
        let tooltip = if missing.is_empty() {
            FILL_IN_ALL.to_string()
        } else {
            format!("Please fill in: {}", missing.join(", "))
        };
        SubmitState {
            enabled: false,
            tooltip: Some(tooltip),
        }
    }

    // ── Study time ─────────────────────────────────────────────────

    /// Aggregate the split time inputs and check the total. The result is
    /// also written to the form's time-error slot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Time`] when the total is outside
    /// 0.1..=24 hours.
    pub fn validate_time_inputs(
        &self,
        form: &mut Form,
        ids: TimeFields<'_>,
    ) -> Result<f64, ValidationError> {
        let total = total_hours(form.text(ids.hours), form.text(ids.minutes), form.text(ids.seconds));
        let result = check_duration(total);
        form.set_time_error(result.as_ref().err().map(ToString::to_string));
        result.map_err(|message| ValidationError::Time(message.to_string()))
    }

    // ── Decorations ────────────────────────────────────────────────

    /// Counter for a field with a maximum length.
    #[must_use]
    pub fn char_counter(&self, field: &Field) -> Option<CharCounter> {
        let max = field.max_length?;
        Some(CharCounter::new(field.text_value().chars().count(), max))
    }

    /// Return every field to `Untouched` and clear the time error.
    /// Values are left alone; see [`Form::clear_values`].
    pub fn reset(&self, form: &mut Form) -> SubmitState {
        for field in form.fields_mut() {
            field.status = FieldStatus::Untouched;
        }
        form.set_time_error(None);
        self.submit_state(form)
    }
}

fn part(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// `hours + minutes/60 + seconds/3600`; blank or unparseable parts are 0.
#[must_use]
pub fn total_hours(hours: &str, minutes: &str, seconds: &str) -> f64 {
    part(hours) + part(minutes) / 60.0 + part(seconds) / 3600.0
}

/// Check an aggregated study time.
///
/// # Errors
///
/// Returns the message for the violated bound.
pub fn check_duration(total: f64) -> Result<f64, &'static str> {
    if total < MIN_STUDY_HOURS {
        Err(TIME_TOO_SHORT)
    } else if total > MAX_STUDY_HOURS {
        Err(TIME_TOO_LONG)
    } else {
        Ok(total)
    }
}
