//! # skt-forms
//!
//! Client-side validation for the Skilltrack skill and study-log forms.
//!
//! - [`FieldKind`]: closed set of field categories, each with one typed rule
//! - [`Form`] / [`Field`]: input values and per-field status
//! - [`FormValidator`]: per-field and whole-form checks, submit gating, and
//!   the cross-field study-time check
//! - [`CharCounter`]: `n/max` counters with warning levels
//! - [`Debouncer`]: quiet-period tracking for keystroke validation
//!
//! Nothing here performs I/O. A failed check is a [`ValidationError`] and
//! never reaches the network.

mod counter;
mod debounce;
mod error;
mod field;
mod form;
mod kind;
mod validator;

pub use counter::{CharCounter, CounterLevel};
pub use debounce::Debouncer;
pub use error::ValidationError;
pub use field::{Choice, Decoration, Field, FieldInput, FieldState, FieldStatus};
pub use form::{Form, FormStatus};
pub use kind::{Check, FieldKind, FieldRule};
pub use validator::{
    FormReport, FormValidator, MAX_STUDY_HOURS, MIN_STUDY_HOURS, SubmitState, TIME_TOO_LONG,
    TIME_TOO_SHORT, TimeFields, check_duration, total_hours,
};
