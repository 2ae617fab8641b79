//! # skt-ui
//!
//! View/event coordinator for the Skilltrack client.
//!
//! The [`Coordinator`] owns all UI state (visible section, modal states,
//! form values, filters, load generations) and drives a [`View`]:
//! - section loads with skeleton placeholders and latest-wins rendering;
//! - skill add/edit/delete and study-log add/delete flows;
//! - blur, debounced-input and checkbox validation events;
//! - toasts for every outcome, plus a generic fallback via [`Coordinator::guard`].
//!
//! [`ThemeController`] manages the light/dark preference separately.

mod coordinator;
mod error;
pub mod forms;
pub mod present;
mod theme;
mod toast;
mod view;

pub use coordinator::{Coordinator, LoadOutcome, ModalState, UNEXPECTED_ERROR};
pub use coordinator::skills::{ADD_SKILL_TITLE, DELETE_SKILL_PROMPT, EDIT_SKILL_TITLE};
pub use coordinator::logs::{DELETE_LOG_PROMPT, LOG_MODAL_TITLE};
pub use error::{ThemeError, UiError};
pub use theme::{JsonThemeStore, MemoryThemeStore, ThemeController, ThemeStore};
pub use toast::{Toast, ToastKind};
pub use view::{CloseReason, ModalKind, Section, View, ViewEvents};
