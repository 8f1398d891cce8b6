use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlassbarError>;

/// Violated preconditions. These indicate a caller bug rather than a
/// recoverable condition; the platform's balanced event contract keeps
/// them out of correct operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlassbarError {
    #[error("engine is not active")]
    NotActive,
    #[error("window actor was never registered")]
    UnknownWindow,
}
