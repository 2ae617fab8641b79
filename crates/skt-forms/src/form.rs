//! A named set of fields.

use serde::Serialize;

use crate::error::ValidationError;
use crate::field::{Choice, Field, FieldInput, FieldStatus};

/// Aggregate of the field statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Untouched,
    Validating,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Form {
    pub id: String,
    fields: Vec<Field>,
    /// Message shown in the study-time slot, if the last time check failed.
    time_error: Option<String>,
}

impl Form {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
            time_error: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Look up a field for modification.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] if no field has this id.
    pub fn field_mut(&mut self, id: &str) -> Result<&mut Field, ValidationError> {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ValidationError::UnknownField(id.to_string()))
    }

    /// Text of a field, or `""` when the field is missing or a checkbox group.
    #[must_use]
    pub fn text(&self, id: &str) -> &str {
        self.field(id).map_or("", Field::text_value)
    }

    /// Replace the text of an input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] if no field has this id, or
    /// [`ValidationError::WrongInput`] if the field is a checkbox group.
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        match &mut self.field_mut(id)?.input {
            FieldInput::Text(current) => {
                *current = value.into();
                Ok(())
            }
            FieldInput::Choices(_) => Err(wrong_input(id, "checkbox choices")),
        }
    }

    /// Replace the boxes of a checkbox group.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] if no field has this id, or
    /// [`ValidationError::WrongInput`] if the field is a text input.
    pub fn set_choices(&mut self, id: &str, choices: Vec<Choice>) -> Result<(), ValidationError> {
        match &mut self.field_mut(id)?.input {
            FieldInput::Choices(current) => {
                *current = choices;
                Ok(())
            }
            FieldInput::Text(_) => Err(wrong_input(id, "text")),
        }
    }

    /// Check or uncheck one box. Unknown values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] if no field has this id, or
    /// [`ValidationError::WrongInput`] if the field is a text input.
    pub fn toggle_choice(
        &mut self,
        id: &str,
        value: &str,
        checked: bool,
    ) -> Result<(), ValidationError> {
        match &mut self.field_mut(id)?.input {
            FieldInput::Choices(choices) => {
                for choice in choices.iter_mut().filter(|c| c.value == value) {
                    choice.checked = checked;
                }
                Ok(())
            }
            FieldInput::Text(_) => Err(wrong_input(id, "text")),
        }
    }

    /// Values of the checked boxes of a group.
    #[must_use]
    pub fn checked_values(&self, id: &str) -> Vec<&str> {
        self.field(id).map_or_else(Vec::new, Field::checked_values)
    }

    /// Set the status of one field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] if no field has this id.
    pub fn mark(&mut self, id: &str, status: FieldStatus) -> Result<(), ValidationError> {
        self.field_mut(id)?.status = status;
        Ok(())
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        let statuses: Vec<FieldStatus> = self.fields.iter().map(Field::status).collect();
        if statuses.contains(&FieldStatus::Validating) {
            FormStatus::Validating
        } else if statuses.contains(&FieldStatus::Invalid) {
            FormStatus::Invalid
        } else if statuses.iter().all(|s| *s == FieldStatus::Untouched) {
            FormStatus::Untouched
        } else {
            FormStatus::Valid
        }
    }

    #[must_use]
    pub fn time_error(&self) -> Option<&str> {
        self.time_error.as_deref()
    }

    pub(crate) fn set_time_error(&mut self, message: Option<String>) {
        self.time_error = message;
    }

    /// Restore every input to its default value. Statuses are untouched;
    /// see [`crate::FormValidator::reset`].
    pub fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    pub(crate) fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }
}

fn wrong_input(id: &str, expected: &'static str) -> ValidationError {
    ValidationError::WrongInput {
        field: id.to_string(),
        expected,
    }
}
