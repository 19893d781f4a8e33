//! Error types for the cocktail search client.
//!
//! # Design
//! `ApiError` keeps the detail a developer needs (status, body, parser
//! message). The widget only ever shows one of two messages to the user, so
//! every `ApiError` collapses onto an `ErrorKind`, and the kind owns the
//! user-facing text. Logic downstream branches on the kind, never on the
//! message.

use thiserror::Error;

use crate::http::TransportError;

pub const NO_RESULTS_MESSAGE: &str = "No drinks found for the given search term.";
pub const REQUEST_FAILED_MESSAGE: &str = "Please check your input or try again...";

/// Errors returned by `CocktailClient::parse_search`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The API answered, and its answer was "nothing matched".
    #[error("no drinks matched the search term")]
    NoResults,

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The host never got a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NoResults => ErrorKind::NoResults,
            ApiError::HttpError { .. }
            | ApiError::DeserializationError(_)
            | ApiError::Transport(_) => ErrorKind::RequestFailed,
        }
    }
}

/// The two failures a user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Previous results are cleared.
    NoResults,
    /// Previous results stay visible under the message.
    RequestFailed,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NoResults => NO_RESULTS_MESSAGE,
            ErrorKind::RequestFailed => REQUEST_FAILED_MESSAGE,
        }
    }
}

/// A user-visible failure: its kind plus the text to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<ErrorKind> for SearchFailure {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl From<&ApiError> for SearchFailure {
    fn from(err: &ApiError) -> Self {
        err.kind().into()
    }
}
