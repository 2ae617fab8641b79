use skt_api::RequestError;
use skt_forms::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    /// The skill to edit is no longer on the server.
    #[error("skill {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Internal(String),
}

impl UiError {
    /// Whether the user has already been told about this failure, through an
    /// inline field error, the time-error slot, or a toast.
    #[must_use]
    pub const fn is_surfaced(&self) -> bool {
        match self {
            Self::Validation(
                ValidationError::UnknownField(_) | ValidationError::WrongInput { .. },
            )
            | Self::Internal(_) => false,
            Self::Validation(_) | Self::Request(_) | Self::NotFound(_) => true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme preference I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme preference is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
