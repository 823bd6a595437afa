//! Error types for apicheck_core operations.

use crate::types::Role;
use thiserror::Error;

/// Core error type for harness operations.
///
/// Stages never propagate these past their own boundary: every error is
/// turned into a failed [`StepResult`](crate::StepResult) with the error's
/// display text as the detail.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The request never produced a response (connection refused, timeout, DNS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status outside the 2xx range.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// A 2xx response did not carry the expected field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A check needs a bearer token that was never obtained.
    #[error("no {0} token available")]
    MissingToken(Role),

    /// The submission needs more created questions than the run recorded.
    #[error("need {needed} question ids to submit answers, only {available} created")]
    NotEnoughQuestions {
        /// Questions referenced by the answer set
        needed: usize,
        /// Questions actually recorded in the session
        available: usize,
    },

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Transport(_) => {
                Some("Is the API server running? Check the base URL with 'apicheck config'.")
            }
            Self::MissingToken(_) => {
                Some("Registration and login both failed for this account; check the earlier results.")
            }
            Self::NotEnoughQuestions { .. } => {
                Some("Question creation failed; the admin account may lack admin rights.")
            }
            Self::UnexpectedStatus { status: 401, .. } => {
                Some("The token was rejected; the server may have been restarted with a new signing key.")
            }
            Self::ConfigError(_) => Some("Run 'apicheck config' to print a valid default configuration."),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(error_chain(&err))
    }
}

/// Render an error and each of its sources, outermost first.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Convenience Result type for apicheck_core operations.
pub type Result<T> = std::result::Result<T, CheckError>;
