//! Hedge solver types

use crate::odds::OddsError;
use thiserror::Error;

/// Hedge sizing errors
///
/// An infeasible least-squares hedge is not an error: it is reported as a
/// stake vector filled with NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HedgeError {
    /// Payoff matrix has no usable inverse
    #[error("Payoff matrix is singular")]
    SingularMatrix,
    /// Matrix or target vector has the wrong shape
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },
    /// No bets supplied
    #[error("Market has no bets")]
    EmptyMarket,
    /// Payoff matrix or target contains NaN or infinity
    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),
    /// A quote could not be converted
    #[error(transparent)]
    InvalidOdds(#[from] OddsError),
    /// Decomposition failed to converge
    #[error("Decomposition failed: {0}")]
    Decomposition(&'static str),
}
