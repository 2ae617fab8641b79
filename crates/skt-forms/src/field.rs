//! Inputs and their validation state.

use serde::Serialize;

use crate::kind::FieldKind;

/// Lifecycle of a single input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    #[default]
    Untouched,
    /// Input arrived and a debounced check is pending.
    Validating,
    Valid,
    Invalid,
}

/// How the view should decorate an input after a check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub valid: bool,
    pub error: Option<String>,
    pub decoration: Decoration,
}

impl FieldState {
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            valid: true,
            error: None,
            decoration: Decoration::Neutral,
        }
    }

    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            error: None,
            decoration: Decoration::Valid,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
            decoration: Decoration::Invalid,
        }
    }

    #[must_use]
    pub const fn status(&self) -> FieldStatus {
        if self.valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

/// One checkbox in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum FieldInput {
    Text(String),
    Choices(Vec<Choice>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub id: String,
    /// Display label; a trailing `*` marks it as required.
    pub label: String,
    pub kind: FieldKind,
    pub input: FieldInput,
    /// Length shown by the character counter, when the input has one.
    pub max_length: Option<usize>,
    /// Value restored by [`crate::Form::clear_values`].
    pub default_value: String,
    pub(crate) status: FieldStatus,
}

impl Field {
    #[must_use]
    pub fn text(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            input: FieldInput::Text(String::new()),
            max_length: None,
            default_value: String::new(),
            status: FieldStatus::Untouched,
        }
    }

    #[must_use]
    pub fn choices(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            input: FieldInput::Choices(Vec::new()),
            ..Self::text(id, label, kind)
        }
    }

    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if let FieldInput::Text(current) = &mut self.input {
            current.clone_from(&value);
        }
        self.default_value = value;
        self
    }

    #[must_use]
    pub const fn status(&self) -> FieldStatus {
        self.status
    }

    /// Raw text; empty for checkbox groups.
    #[must_use]
    pub fn text_value(&self) -> &str {
        match &self.input {
            FieldInput::Text(value) => value,
            FieldInput::Choices(_) => "",
        }
    }

    /// Values of the checked boxes, in display order.
    #[must_use]
    pub fn checked_values(&self) -> Vec<&str> {
        match &self.input {
            FieldInput::Choices(choices) => choices
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.value.as_str())
                .collect(),
            FieldInput::Text(_) => Vec::new(),
        }
    }

    /// Label without the required marker, for messages.
    #[must_use]
    pub fn plain_label(&self) -> &str {
        self.label.trim_end().trim_end_matches('*').trim()
    }

    pub(crate) fn clear(&mut self) {
        match &mut self.input {
            FieldInput::Text(value) => value.clone_from(&self.default_value),
            FieldInput::Choices(choices) => {
                for choice in choices {
                    choice.checked = false;
                }
            }
        }
    }
}
