mod dashboard;
mod dispatch;
mod log;
mod parse;
mod skill;
mod theme;

pub use dispatch::dispatch;

/// A failure the user has already been shown (toast, field error, or
/// time error). Only the exit status remains to be set.
#[derive(Debug, thiserror::Error)]
#[error("command failed")]
pub struct Reported;
