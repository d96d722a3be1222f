//! Error types for the slope solver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while solving.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Fewer than two quantities were provided.
    #[error("Please enter at least two values")]
    InsufficientInputs,

    /// No known pair matched any branch.
    #[error("Invalid combination of inputs")]
    InvalidCombination,

    /// A derivation step divided by exactly zero.
    #[error("Division by zero")]
    DivisionByZero,
}

impl SolveError {
    /// The machine-readable kind of this error.
    pub fn kind(&self) -> SolveErrorKind {
        match self {
            SolveError::InsufficientInputs => SolveErrorKind::InsufficientInputs,
            SolveError::InvalidCombination => SolveErrorKind::InvalidCombination,
            SolveError::DivisionByZero => SolveErrorKind::DivisionByZero,
        }
    }
}

/// Serializable tag for a [`SolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveErrorKind {
    /// See [`SolveError::InsufficientInputs`].
    InsufficientInputs,
    /// See [`SolveError::InvalidCombination`].
    InvalidCombination,
    /// See [`SolveError::DivisionByZero`].
    DivisionByZero,
}

impl From<SolveErrorKind> for SolveError {
    fn from(kind: SolveErrorKind) -> Self {
        match kind {
            SolveErrorKind::InsufficientInputs => SolveError::InsufficientInputs,
            SolveErrorKind::InvalidCombination => SolveError::InvalidCombination,
            SolveErrorKind::DivisionByZero => SolveError::DivisionByZero,
        }
    }
}
