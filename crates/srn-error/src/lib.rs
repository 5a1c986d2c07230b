//! Structured error taxonomy shared by the reader, the source manager, and
//! namespace expansion.
//!
//! Every error carries a [`Kind`] drawn from a closed set, a
//! [`LocationRange`], and an optional message override. A default
//! human-readable message is associated with each kind; an override, when
//! present, supersedes it at display time.

use srn_location::LocationRange;
use thiserror::Error;

/// The closed set of error kinds the core can raise.
///
/// `Final` is a reserved terminator, not a real error: it exists so callers
/// that exhaustively match on `Kind` have a stable sentinel to grow into if
/// the set is ever extended, without silently accepting an `_` arm today.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    #[error("namespace failed to load")]
    NSLoadError,
    #[error("namespace failed to register with the source manager")]
    NSAddToSMError,
    #[error("invalid digit for number")]
    InvalidDigitForNumber,
    #[error("number has two decimal points")]
    TwoFloatPoints,
    #[error("invalid character for symbol")]
    InvalidCharacterForSymbol,
    #[error("end of file while scanning a list")]
    EOFWhileScanningAList,
    #[error("end of file while scanning a string")]
    EOFWhileScanningAString,
    /// Reserved terminator. Never constructed by the core.
    #[error("final")]
    Final,
}

/// A structured error: a [`Kind`], a [`LocationRange`], and an optional
/// override message that supersedes the kind's default text at display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: Kind,
    pub range: LocationRange,
    message: Option<String>,
}

impl Error {
    /// Construct an error with the kind's default message.
    pub fn new(kind: Kind, range: LocationRange) -> Self {
        Self { kind, range, message: None }
    }

    /// Construct an error with an explicit message overriding the kind's default.
    pub fn with_message(kind: Kind, range: LocationRange, message: impl Into<String>) -> Self {
        Self { kind, range, message: Some(message.into()) }
    }

    /// The message that will be displayed: the override if present, else the
    /// kind's default.
    pub fn message(&self) -> String {
        match &self.message {
            Some(m) => m.clone(),
            None => self.kind.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.range.start, self.message())
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the core crates.
pub type Result<T> = std::result::Result<T, Error>;
