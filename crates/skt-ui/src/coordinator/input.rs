use skt_forms::{CharCounter, Field, FieldState, FieldStatus, Form, SubmitState};

use super::Coordinator;
use crate::error::UiError;
use crate::forms::{self, TIME_FIELDS};
use crate::view::ModalKind;

/// One field as the view should draw it, copied out of the form so it can
/// be rendered after the state lock is released.
pub(super) struct FieldSnapshot {
    field: Field,
    state: FieldState,
    counter: Option<CharCounter>,
}

/// Everything the view needs after one field check.
struct Checked {
    snapshot: FieldSnapshot,
    submit: SubmitState,
    time_error: Option<Option<String>>,
}

fn debounce_key(modal: ModalKind, id: &str) -> String {
    format!("{modal:?}:{id}")
}

impl Coordinator {
    /// Copy the named fields of `form` with the state each should show.
    pub(super) fn snapshot<'a>(
        &self,
        form: &Form,
        states: impl IntoIterator<Item = (&'a str, FieldState)>,
    ) -> Vec<FieldSnapshot> {
        states
            .into_iter()
            .filter_map(|(id, state)| {
                let field = form.field(id)?.clone();
                Some(FieldSnapshot {
                    counter: self.validator.char_counter(&field),
                    field,
                    state,
                })
            })
            .collect()
    }

    /// Every field of `form` in the neutral state, as after a reset.
    pub(super) fn neutral_snapshot(&self, form: &Form) -> Vec<FieldSnapshot> {
        self.snapshot(
            form,
            form.fields()
                .iter()
                .map(|field| (field.id.as_str(), FieldState::neutral())),
        )
    }

    pub(super) fn render_snapshot(&self, modal: ModalKind, fields: &[FieldSnapshot]) {
        for snapshot in fields {
            self.view.render_field(
                modal,
                &snapshot.field,
                &snapshot.state,
                snapshot.counter.as_ref(),
            );
        }
    }

    /// Re-check a field when it loses focus. Leaving one of the study-time
    /// inputs also re-checks the total. A debounced check still pending for
    /// this field is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Validation`] if the form has no such field.
    pub fn field_blur(&self, modal: ModalKind, id: &str) -> Result<FieldState, UiError> {
        self.debouncer.cancel(&debounce_key(modal, id));
        self.check_field(modal, id)
    }

    fn check_field(&self, modal: ModalKind, id: &str) -> Result<FieldState, UiError> {
        let checked = {
            let mut state = self.state();
            let form = state.form_mut(modal);
            let field_state = self.validator.validate_field_in(form, id)?;
            let time_error = (modal == ModalKind::Log && forms::is_time_field(id)).then(|| {
                let _ = self.validator.validate_time_inputs(form, TIME_FIELDS);
                form.time_error().map(str::to_string)
            });
            let field = form.field_mut(id)?.clone();
            Checked {
                snapshot: FieldSnapshot {
                    counter: self.validator.char_counter(&field),
                    field,
                    state: field_state,
                },
                submit: self.validator.submit_state(form),
                time_error,
            }
        };

        self.render_snapshot(modal, std::slice::from_ref(&checked.snapshot));
        self.view.render_submit(modal, &checked.submit);
        if let Some(message) = &checked.time_error {
            self.view.render_time_error(message.as_deref());
        }
        Ok(checked.snapshot.state)
    }

    /// Store a value without checking it. Counters and the submit button
    /// are refreshed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Validation`] if the form has no such field.
    pub fn set_field_value(
        &self,
        modal: ModalKind,
        id: &str,
        value: impl Into<String>,
    ) -> Result<(), UiError> {
        self.store_value(modal, id, value.into(), FieldStatus::Untouched)
    }

    /// Keystroke input: store the value, then check it once input on this
    /// field has been quiet for the debounce period. Returns `None` when a
    /// later keystroke superseded this one.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Validation`] if the form has no such field.
    pub async fn field_input(
        &self,
        modal: ModalKind,
        id: &str,
        value: impl Into<String>,
    ) -> Result<Option<FieldState>, UiError> {
        self.store_value(modal, id, value.into(), FieldStatus::Validating)?;
        if !self.debouncer.settle(&debounce_key(modal, id)).await {
            return Ok(None);
        }
        self.check_field(modal, id).map(Some)
    }

    /// A checkbox in a group changed; the group is checked immediately.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Validation`] if the form has no such field.
    pub fn checkbox_toggled(
        &self,
        modal: ModalKind,
        id: &str,
        value: &str,
        checked: bool,
    ) -> Result<FieldState, UiError> {
        self.state()
            .form_mut(modal)
            .toggle_choice(id, value, checked)?;
        self.field_blur(modal, id)
    }

    fn store_value(
        &self,
        modal: ModalKind,
        id: &str,
        value: String,
        status: FieldStatus,
    ) -> Result<(), UiError> {
        let (counter, submit) = {
            let mut state = self.state();
            let form = state.form_mut(modal);
            form.set_text(id, value)?;
            form.mark(id, status)?;
            let counter = form.field(id).and_then(|f| self.validator.char_counter(f));
            (counter, self.validator.submit_state(form))
        };
        if let Some(counter) = &counter {
            self.view.render_counter(modal, id, counter);
        }
        self.view.render_submit(modal, &submit);
        Ok(())
    }
}
