//! Rule tables for every field kind, plus submit gating and the time check.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use skt_forms::{
    Choice, Decoration, Field, FieldKind, FieldStatus, Form, FormStatus, FormValidator,
    TimeFields, ValidationError,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn validator() -> FormValidator {
    FormValidator::with_today(fixed_today)
}

fn text(kind: FieldKind, value: &str) -> Field {
    let mut field = Field::text("f", "Field *", kind);
    field.input = skt_forms::FieldInput::Text(value.to_string());
    field
}

fn skill_form() -> Form {
    Form::new("skillForm")
        .with_field(Field::text("skillName", "Skill Name *", FieldKind::SkillName).with_max_length(50))
        .with_field(Field::text("skillCategory", "Category", FieldKind::Plain).with_max_length(30))
        .with_field(Field::text("skillStatus", "Status", FieldKind::Plain).with_default("To Learn"))
}

fn log_form() -> Form {
    Form::new("logForm")
        .with_field(Field::text("logDate", "Date *", FieldKind::Date))
        .with_field(Field::text("logHours", "Hours", FieldKind::Plain))
        .with_field(Field::text("logMinutes", "Minutes", FieldKind::Plain))
        .with_field(Field::text("logSeconds", "Seconds", FieldKind::Plain))
        .with_field(Field::choices("logSkills", "Skills *", FieldKind::Skills))
}

const TIME: TimeFields<'static> = TimeFields {
    hours: "logHours",
    minutes: "logMinutes",
    seconds: "logSeconds",
};

// ---------------------------------------------------------------------------
// Per-kind rules
// ---------------------------------------------------------------------------

#[rstest]
#[case("", false)]
#[case("ab", false)]
#[case("   ab   ", false)]
#[case("abc", true)]
#[case("Rust", true)]
#[case(&"x".repeat(50), true)]
#[case(&"x".repeat(51), false)]
#[case("Ünï", true)]
fn skill_name_length(#[case] value: &str, #[case] valid: bool) {
    let state = validator().validate_field(&text(FieldKind::SkillName, value));
    assert_eq!(state.valid, valid, "{value:?}");
    if !valid {
        assert_eq!(state.error.as_deref(), Some("Skill name must be 3-50 characters"));
    }
}

#[rstest]
#[case("2025-03-15", true)]
#[case("2025-03-14", true)]
#[case("2020-01-01", true)]
#[case("2025-03-16", false)]
#[case("2030-01-01", false)]
#[case("not a date", false)]
#[case("", false)]
fn date_not_in_future(#[case] value: &str, #[case] valid: bool) {
    let state = validator().validate_field(&text(FieldKind::Date, value));
    assert_eq!(state.valid, valid, "{value:?}");
    if !valid {
        assert_eq!(state.error.as_deref(), Some("Date cannot be in the future"));
    }
}

#[rstest]
#[case("0.1", true)]
#[case("24", true)]
#[case("1.5", true)]
#[case("0.09", false)]
#[case("24.01", false)]
#[case("abc", false)]
#[case("NaN", false)]
#[case("inf", false)]
fn hours_range(#[case] value: &str, #[case] valid: bool) {
    let state = validator().validate_field(&text(FieldKind::Hours, value));
    assert_eq!(state.valid, valid, "{value:?}");
}

#[rstest]
#[case(&[], false)]
#[case(&[true], true)]
#[case(&[false, false], false)]
#[case(&[false, true, true], true)]
fn skills_group_needs_one(#[case] checked: &[bool], #[case] valid: bool) {
    let mut field = Field::choices("logSkills", "Skills *", FieldKind::Skills);
    field.input = skt_forms::FieldInput::Choices(
        checked
            .iter()
            .enumerate()
            .map(|(i, c)| Choice {
                value: i.to_string(),
                label: format!("Skill {i}"),
                checked: *c,
            })
            .collect(),
    );
    let state = validator().validate_field(&field);
    assert_eq!(state.valid, valid);
    if !valid {
        assert_eq!(state.error.as_deref(), Some("Please select at least one skill"));
    }
}

#[test]
fn text_never_satisfies_a_selection_rule() {
    let state = validator().validate_field(&text(FieldKind::Skills, "1, 2"));
    assert!(!state.valid);
    assert_eq!(state.decoration, Decoration::Invalid);
}

#[test]
fn optional_empty_is_neutral() {
    let form = skill_form();
    let state = validator().validate_field(form.field("skillCategory").unwrap());
    assert!(state.valid);
    assert_eq!(state.error, None);
    assert_eq!(state.decoration, Decoration::Neutral);
}

// ---------------------------------------------------------------------------
// Form-level behaviour
// ---------------------------------------------------------------------------

#[test]
fn validate_form_is_conjunction() {
    let mut form = skill_form();
    form.set_text("skillName", "Go").unwrap();
    let report = validator().validate_form(&mut form);
    assert!(!report.valid);
    assert_eq!(report.invalid_labels(&form), vec!["Skill Name".to_string()]);
    assert_eq!(form.status(), FormStatus::Invalid);

    form.set_text("skillName", "Rust").unwrap();
    let report = validator().validate_form(&mut form);
    assert!(report.valid);
    assert_eq!(form.status(), FormStatus::Valid);
}

#[test]
fn failing_report_names_fields() {
    let mut form = log_form();
    let report = validator().validate_form(&mut form);
    assert_eq!(
        report.into_result(&form),
        Err(ValidationError::InvalidFields {
            fields: vec!["Date".to_string(), "Skills".to_string()]
        })
    );
}

#[test]
fn validate_form_ignores_time_inputs() {
    let mut form = log_form();
    form.set_text("logDate", "2025-03-01").unwrap();
    form.set_choices("logSkills", vec![Choice::new("1", "Rust")]).unwrap();
    form.toggle_choice("logSkills", "1", true).unwrap();

    assert!(validator().validate_form(&mut form).valid);
    assert!(validator().validate_time_inputs(&mut form, TIME).is_err());
}

#[test]
fn blur_re_evaluates_from_scratch() {
    let mut form = skill_form();
    let v = validator();
    form.set_text("skillName", "ab").unwrap();
    assert!(!v.validate_field_in(&mut form, "skillName").unwrap().valid);
    form.set_text("skillName", "abc").unwrap();
    assert!(v.validate_field_in(&mut form, "skillName").unwrap().valid);
    assert_eq!(form.field("skillName").unwrap().status(), FieldStatus::Valid);
}

// ---------------------------------------------------------------------------
// Submit gating
// ---------------------------------------------------------------------------

#[test]
fn empty_log_form_lists_every_missing_field() {
    let state = validator().submit_state(&log_form());
    assert!(!state.enabled);
    assert_eq!(
        state.tooltip.as_deref(),
        Some("Please fill in: Date, at least one skill")
    );
}

#[test]
fn short_name_blocks_submit() {
    let mut form = skill_form();
    form.set_text("skillName", "  ab ").unwrap();
    let state = validator().submit_state(&form);
    assert!(!state.enabled);
    assert_eq!(state.tooltip.as_deref(), Some("Please fill in: Skill Name"));

    form.set_text("skillName", "abc").unwrap();
    let state = validator().submit_state(&form);
    assert!(state.enabled);
    assert_eq!(state.tooltip, None);
}

#[test]
fn future_date_still_enables_submit() {
    let mut form = log_form();
    form.set_text("logDate", "2099-01-01").unwrap();
    form.set_choices("logSkills", vec![Choice::new("1", "Rust")]).unwrap();
    form.toggle_choice("logSkills", "1", true).unwrap();
    assert!(validator().submit_state(&form).enabled);
}

#[test]
fn unlabeled_required_field_uses_generic_tooltip() {
    let form = Form::new("bare").with_field(Field::text("name", "*", FieldKind::SkillName));
    let state = validator().submit_state(&form);
    assert_eq!(
        state.tooltip.as_deref(),
        Some("Please fill in all required fields")
    );
}

// ---------------------------------------------------------------------------
// Study time
// ---------------------------------------------------------------------------

#[rstest]
#[case("", "", "", Some("Study time must be at least 0.1 hours (6 minutes)"))]
#[case("0", "5", "0", Some("Study time must be at least 0.1 hours (6 minutes)"))]
#[case("0", "6", "0", None)]
#[case("1", "30", "", None)]
#[case("", "", "360", None)]
#[case("24", "", "", None)]
#[case("24", "0", "1", Some("Study time cannot exceed 24 hours"))]
#[case("abc", "30", "", None)]
fn time_inputs(
    #[case] hours: &str,
    #[case] minutes: &str,
    #[case] seconds: &str,
    #[case] error: Option<&str>,
) {
    let mut form = log_form();
    form.set_text("logHours", hours).unwrap();
    form.set_text("logMinutes", minutes).unwrap();
    form.set_text("logSeconds", seconds).unwrap();

    let result = validator().validate_time_inputs(&mut form, TIME);

    assert_eq!(form.time_error(), error);
    assert_eq!(result.is_ok(), error.is_none());
}

#[test]
fn time_total_is_summed() {
    let mut form = log_form();
    form.set_text("logHours", "1").unwrap();
    form.set_text("logMinutes", "30").unwrap();
    form.set_text("logSeconds", "36").unwrap();
    let total = validator().validate_time_inputs(&mut form, TIME).unwrap();
    assert!((total - 1.51).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Counters and reset
// ---------------------------------------------------------------------------

#[test]
fn counter_tracks_length() {
    let mut form = skill_form();
    form.set_text("skillName", "x".repeat(41)).unwrap();
    let counter = validator()
        .char_counter(form.field("skillName").unwrap())
        .unwrap();
    assert_eq!(counter.to_string(), "41/50");
    assert_eq!(counter.level, skt_forms::CounterLevel::Warning);
    assert!(validator().char_counter(form.field("skillStatus").unwrap()).is_none());
}

#[test]
fn reset_clears_statuses_and_time_error() {
    let mut form = log_form();
    let v = validator();
    v.validate_form(&mut form);
    let _ = v.validate_time_inputs(&mut form, TIME);
    assert_eq!(form.status(), FormStatus::Invalid);

    let submit = v.reset(&mut form);

    assert_eq!(form.status(), FormStatus::Untouched);
    assert_eq!(form.time_error(), None);
    assert!(!submit.enabled);
}
