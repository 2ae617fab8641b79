//! Validation error types. These never reach the network layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields failed their rule; carries the field labels.
    #[error("please correct: {}", .fields.join(", "))]
    InvalidFields { fields: Vec<String> },

    /// The aggregated study time is out of range.
    #[error("{0}")]
    Time(String),

    /// A form operation named a field the form does not declare.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A value of the wrong shape was written to a field, such as text to a
    /// checkbox group.
    #[error("field '{field}' takes {expected}")]
    WrongInput { field: String, expected: &'static str },
}
