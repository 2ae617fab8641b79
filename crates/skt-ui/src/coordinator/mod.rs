//! Sections, modals, and mutation flows.
//!
//! All mutable UI state lives in one [`Coordinator`] instance behind a
//! `parking_lot` mutex. The lock is only ever held between awaits, never
//! across one.

mod input;
mod loads;
pub(crate) mod logs;
pub(crate) mod skills;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use skt_api::{ApiClient, Transport};
use skt_config::UiConfig;
use skt_core::{Skill, SkillFilters};
use skt_forms::{Debouncer, Form, FormValidator};

use crate::error::UiError;
use crate::forms;
use crate::toast::Toast;
use crate::view::{CloseReason, ModalKind, Section, View, ViewEvents};

pub use loads::LoadOutcome;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// Per-section load tickets. Only the holder of the latest ticket renders.
#[derive(Debug, Default)]
struct Generations {
    dashboard: u64,
    skills: u64,
    logs: u64,
}

impl Generations {
    const fn current(&self, section: Section) -> u64 {
        match section {
            Section::Dashboard => self.dashboard,
            Section::Skills => self.skills,
            Section::Logs => self.logs,
        }
    }

    fn next(&mut self, section: Section) -> u64 {
        let slot = match section {
            Section::Dashboard => &mut self.dashboard,
            Section::Skills => &mut self.skills,
            Section::Logs => &mut self.logs,
        };
        *slot += 1;
        *slot
    }

    const fn is_current(&self, section: Section, ticket: u64) -> bool {
        self.current(section) == ticket
    }
}

struct UiState {
    section: Section,
    /// Skill being edited; `None` while the skill modal adds.
    editing: Option<Skill>,
    skill_modal: ModalState,
    log_modal: ModalState,
    skill_form: Form,
    log_form: Form,
    filters: SkillFilters,
    generations: Generations,
}

impl UiState {
    fn new() -> Self {
        Self {
            section: Section::Dashboard,
            editing: None,
            skill_modal: ModalState::Hidden,
            log_modal: ModalState::Hidden,
            skill_form: forms::skill_form(),
            log_form: forms::log_form(),
            filters: SkillFilters::default(),
            generations: Generations::default(),
        }
    }

    fn form_mut(&mut self, modal: ModalKind) -> &mut Form {
        match modal {
            ModalKind::Skill => &mut self.skill_form,
            ModalKind::Log => &mut self.log_form,
        }
    }

    const fn form(&self, modal: ModalKind) -> &Form {
        match modal {
            ModalKind::Skill => &self.skill_form,
            ModalKind::Log => &self.log_form,
        }
    }

    fn modal_mut(&mut self, modal: ModalKind) -> &mut ModalState {
        match modal {
            ModalKind::Skill => &mut self.skill_modal,
            ModalKind::Log => &mut self.log_modal,
        }
    }
}

pub struct Coordinator {
    api: ApiClient,
    view: Arc<dyn View>,
    validator: FormValidator,
    debouncer: Debouncer,
    log_limit: u32,
    toast_ttl: Duration,
    state: Mutex<UiState>,
}

impl Coordinator {
    pub fn new(transport: Arc<dyn Transport>, view: Arc<dyn View>, config: &UiConfig) -> Self {
        let events = Arc::new(ViewEvents::new(view.clone(), config.toast_ttl()));
        Self {
            api: ApiClient::new(transport, events),
            view,
            validator: FormValidator::new(),
            debouncer: Debouncer::new(config.debounce()),
            log_limit: config.log_limit,
            toast_ttl: config.toast_ttl(),
            state: Mutex::new(UiState::new()),
        }
    }

    /// Replace the validator, e.g. to pin "today".
    #[must_use]
    pub const fn with_validator(mut self, validator: FormValidator) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    // ── State accessors ────────────────────────────────────────────

    #[must_use]
    pub fn section(&self) -> Section {
        self.state().section
    }

    #[must_use]
    pub fn modal_state(&self, modal: ModalKind) -> ModalState {
        let state = self.state();
        match modal {
            ModalKind::Skill => state.skill_modal,
            ModalKind::Log => state.log_modal,
        }
    }

    #[must_use]
    pub fn editing(&self) -> Option<Skill> {
        self.state().editing.clone()
    }

    #[must_use]
    pub fn filters(&self) -> SkillFilters {
        self.state().filters.clone()
    }

    /// Snapshot of a form's values and statuses.
    #[must_use]
    pub fn form(&self, modal: ModalKind) -> Form {
        self.state().form(modal).clone()
    }

    fn state(&self) -> MutexGuard<'_, UiState> {
        self.state.lock()
    }

    // ── Navigation ─────────────────────────────────────────────────

    /// Start on the dashboard.
    ///
    /// # Errors
    ///
    /// As [`Self::show_section`].
    pub async fn init(&self) -> Result<LoadOutcome, UiError> {
        tracing::info!("skilltrack client starting");
        self.show_section(Section::Dashboard).await
    }

    /// Make `section` the visible one and load its data.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Request`] when the section's data fails to load.
    pub async fn show_section(&self, section: Section) -> Result<LoadOutcome, UiError> {
        self.focus(section);
        self.load_section(section).await
    }

    /// Make `section` the visible one without loading it. Mutations refresh
    /// the visible section.
    pub fn focus(&self, section: Section) {
        self.state().section = section;
        self.view.show_section(section);
    }

    /// # Errors
    ///
    /// Returns [`UiError::Request`] when the data fails to load.
    pub async fn load_section(&self, section: Section) -> Result<LoadOutcome, UiError> {
        match section {
            Section::Dashboard => self.load_dashboard().await,
            Section::Skills => self.load_skills().await,
            Section::Logs => self.load_logs().await,
        }
    }

    // ── Modals ─────────────────────────────────────────────────────

    pub fn close_modal(&self, modal: ModalKind, reason: CloseReason) {
        {
            let mut state = self.state();
            *state.modal_mut(modal) = ModalState::Hidden;
            if modal == ModalKind::Skill {
                state.editing = None;
            }
        }
        self.debouncer.cancel_all();
        tracing::debug!(?modal, ?reason, "modal closed");
        self.view.hide_modal(modal);
    }

    fn open_modal(&self, modal: ModalKind, title: &str) {
        *self.state().modal_mut(modal) = ModalState::Visible;
        self.view.show_modal(modal, title);
    }

    // ── Feedback ───────────────────────────────────────────────────

    fn toast(&self, toast: Toast) {
        self.view.show_toast(&toast.with_ttl(self.toast_ttl));
    }

    /// Refresh the dashboard when it is the visible section.
    async fn refresh_dashboard_if_visible(&self) {
        if self.section() == Section::Dashboard {
            self.refresh(Section::Dashboard).await;
        }
    }

    /// Reload after a mutation. Failures were already surfaced by the façade.
    async fn refresh(&self, section: Section) {
        if let Err(error) = self.load_section(section).await {
            tracing::debug!(section = section.as_str(), %error, "refresh failed");
        }
    }

    /// Run a UI task. Failures not already shown to the user are logged and
    /// reported with a generic toast.
    pub async fn guard<T, F>(&self, task: F) -> Option<T>
    where
        F: Future<Output = Result<T, UiError>>,
    {
        match task.await {
            Ok(value) => Some(value),
            Err(error) if error.is_surfaced() => {
                tracing::debug!(%error, "task failed");
                None
            }
            Err(error) => {
                tracing::error!(%error, "unhandled task failure");
                self.toast(Toast::error(UNEXPECTED_ERROR));
                None
            }
        }
    }
}
