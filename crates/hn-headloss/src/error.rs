//! Error types for head-loss and profile calculations.

use hn_core::error::HnError;
use thiserror::Error;

/// Errors that can occur during profile calculations.
///
/// The friction laws themselves never fail; these cover inputs for which no
/// meaningful profile exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeadLossError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type HeadLossResult<T> = Result<T, HeadLossError>;

impl From<HeadLossError> for HnError {
    fn from(e: HeadLossError) -> Self {
        match e {
            HeadLossError::NonPhysical { what } => HnError::InvalidArg {
                what: format!("non-physical {what}"),
            },
            HeadLossError::InvalidArg { what } => HnError::InvalidArg {
                what: what.to_string(),
            },
        }
    }
}
