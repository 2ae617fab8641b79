//! The rendering seam.
//!
//! The coordinator never draws anything itself; every visible effect goes
//! through a [`View`]. Decoration-only hooks default to no-ops so that a
//! plain terminal view only implements what it can show.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use skt_api::{ApiEvents, RequestError};
use skt_core::{Skill, Stats, StudyLog, Theme};
use skt_forms::{CharCounter, Choice, Field, FieldState, SubmitState};

use crate::toast::Toast;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Dashboard,
    Skills,
    Logs,
}

impl Section {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Skills => "skills",
            Self::Logs => "logs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Skill,
    Log,
}

/// How a modal was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Cancel,
    Backdrop,
    /// Closed by the coordinator after a successful save.
    Saved,
}

pub trait View: Send + Sync {
    // ── Data ───────────────────────────────────────────────────────

    fn render_dashboard(&self, stats: &Stats);
    fn render_skills(&self, skills: &[Skill]);
    fn render_logs(&self, logs: &[StudyLog]);

    /// Options for the category filter: unique, sorted, plus the selection.
    fn render_category_filter(&self, _categories: &[String], _selected: Option<&str>) {}

    /// Checkbox choices for the log form.
    fn render_skill_choices(&self, _choices: &[Choice]) {}

    // ── Feedback ───────────────────────────────────────────────────

    fn show_toast(&self, toast: &Toast);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;

    fn set_loading(&self, _visible: bool) {}

    // ── Chrome ─────────────────────────────────────────────────────

    fn show_section(&self, _section: Section) {}
    fn show_skeleton(&self, _section: Section) {}
    fn clear_skeleton(&self, _section: Section) {}
    fn show_modal(&self, _modal: ModalKind, _title: &str) {}
    fn hide_modal(&self, _modal: ModalKind) {}
    fn set_form_busy(&self, _modal: ModalKind, _busy: bool) {}
    fn flash_success(&self, _modal: ModalKind) {}
    fn apply_theme(&self, _theme: Theme) {}

    // ── Form decoration ────────────────────────────────────────────

    fn render_field(
        &self,
        _modal: ModalKind,
        _field: &Field,
        _state: &FieldState,
        _counter: Option<&CharCounter>,
    ) {
    }
    fn render_counter(&self, _modal: ModalKind, _field_id: &str, _counter: &CharCounter) {}
    fn render_submit(&self, _modal: ModalKind, _state: &SubmitState) {}
    fn render_time_error(&self, _message: Option<&str>) {}
}

/// Routes façade activity to a view: the loading indicator and one error
/// toast per failed request.
pub struct ViewEvents {
    view: Arc<dyn View>,
    toast_ttl: Duration,
}

impl ViewEvents {
    #[must_use]
    pub fn new(view: Arc<dyn View>, toast_ttl: Duration) -> Self {
        Self { view, toast_ttl }
    }
}

impl ApiEvents for ViewEvents {
    fn loading_changed(&self, visible: bool) {
        self.view.set_loading(visible);
    }

    fn request_failed(&self, error: &RequestError) {
        self.view
            .show_toast(&Toast::error(format!("Error: {error}")).with_ttl(self.toast_ttl));
    }
}
