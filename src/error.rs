/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::model::decode::{FieldPath, JsonKind, Shape};
use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type WmResult<T> = Result<T, AppError>;

/// Main error type of the library
///
/// Transport failures, decode failures and item-set consistency failures are
/// kept as distinct variants so callers can tell them apart without parsing
/// messages.
#[derive(Debug)]
pub enum AppError {
    /// The HTTP request could not be performed
    Network(reqwest::Error),
    /// The server rejected the session credentials (401)
    Unauthorized,
    /// The requested resource does not exist (404)
    NotFound(String),
    /// The server answered 429
    RateLimitExceeded,
    /// Any other non-success status
    Unexpected(StatusCode),
    /// A JSON value did not match the declared record shape
    Decode(DecodeError),
    /// The requested item is absent from its own item set
    ItemNotInSet {
        /// Identifier that could not be matched
        requested_id: String,
    },
    /// Caller supplied an unusable argument
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound(path) => write!(f, "not found: {path}"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Decode(e) => write!(f, "decode error: {e}"),
            AppError::ItemNotInSet { requested_id } => {
                write!(f, "consistency error: item `{requested_id}` is not in its item set")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        AppError::Decode(e)
    }
}

/// Failure to decode a JSON value into a declared type
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// Where in the document the failure happened
    pub path: FieldPath,
    /// What went wrong
    pub kind: DecodeErrorKind,
}

/// Reason a value failed to decode
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeErrorKind {
    /// A required key is absent
    MissingField {
        /// Shape the field was declared with
        expected: Shape,
    },
    /// The value has the wrong JSON type, or does not fit the target
    TypeMismatch {
        /// Declared shape
        expected: Shape,
        /// Kind of JSON value that was found
        found: JsonKind,
    },
    /// A string is not a member of the declared enumeration
    UnknownVariant {
        /// Name of the enumeration
        enumeration: &'static str,
        /// Raw value received
        value: String,
    },
    /// A timestamp could not be parsed
    InvalidTimestamp {
        /// Raw value received
        value: String,
    },
}

impl DecodeError {
    /// Creates a new error at `path`
    #[must_use]
    pub fn new(path: FieldPath, kind: DecodeErrorKind) -> Self {
        Self { path, kind }
    }

    /// A required key is missing at `path`
    #[must_use]
    pub fn missing(path: &FieldPath, expected: Shape) -> Self {
        Self::new(path.clone(), DecodeErrorKind::MissingField { expected })
    }

    /// The value at `path` does not have the `expected` shape
    #[must_use]
    pub fn mismatch(path: &FieldPath, expected: Shape, found: JsonKind) -> Self {
        Self::new(path.clone(), DecodeErrorKind::TypeMismatch { expected, found })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DecodeErrorKind::MissingField { expected } => {
                write!(f, "missing field `{}`, expected {expected}", self.path)
            }
            DecodeErrorKind::TypeMismatch { expected, found } => {
                write!(f, "at `{}`: expected {expected}, found {found}", self.path)
            }
            DecodeErrorKind::UnknownVariant { enumeration, value } => {
                write!(f, "at `{}`: unknown {enumeration} value `{value}`", self.path)
            }
            DecodeErrorKind::InvalidTimestamp { value } => {
                write!(f, "at `{}`: invalid timestamp `{value}`", self.path)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
