//! Error types for solver operations.

use hn_core::error::HnError;
use hn_network::NetworkError;
use thiserror::Error;

/// Errors that can occur while solving or walking a network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for HnError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ProblemSetup { what } => HnError::InvalidArg { what },
            SolverError::Network(inner) => inner.into(),
            SolverError::Numeric { what } => HnError::Invariant { what },
        }
    }
}
