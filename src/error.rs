//! Error types for subnet calculations.
//!
//! Every failure is terminal for a run; `main` is the only place that turns a
//! [`CalcError`] into an exit status.

use thiserror::Error;

/// Errors returned while parsing input or rendering a summary.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid address {text:?}: {reason}")]
    InvalidAddress { text: String, reason: String },

    #[error("invalid netmask {text:?}: {reason}")]
    InvalidMask { text: String, reason: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn address(text: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidAddress {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mask(text: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidMask {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
