//! Cross-cutting error types for Skilltrack.
//!
//! Transport and validation failures have their own types in `skt-api` and
//! `skt-forms`. This module only covers parsing of the closed value sets
//! defined in this crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A status string outside "To Learn" / "In Progress" / "Learned".
    #[error("invalid skill status '{0}' (expected To Learn, In Progress, or Learned)")]
    InvalidStatus(String),

    /// A theme string other than "dark" or "light".
    #[error("invalid theme '{0}' (expected dark or light)")]
    InvalidTheme(String),

    /// A calendar date that is not `YYYY-MM-DD` or an ISO datetime.
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
