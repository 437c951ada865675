//! The tagged success/failure union handed back to callers.

use serde::Deserialize;
use serde_json::Value;

use crate::envelope::ErrorObject;

/// Outcome of one dispatched call.
///
/// Protocol-level errors — a well-formed response carrying an `error`
/// field — travel through this value channel. Transport-level failures
/// (network, status, decode) never appear here; they are `Err` values of
/// the surrounding `Result` because they mean the call's outcome is
/// unknown, not that the server said no.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T = Value, E = ErrorObject> {
    Success(T),
    Failure(E),
}

impl<T, E> CallOutcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure payload, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Collapse into a plain `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

/// Error shape for methods that declare none.
///
/// Uninhabited, so the `Failure` arm of a
/// [`CallOutcome`]`<T, NoError>` cannot be constructed; callers still
/// observe transport-level failures through the outer `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NoError {}

impl std::fmt::Display for NoError {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}
