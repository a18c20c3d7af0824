//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, SessionError};
use storage::StorageError;

/// Errors emitted while loading a category's question pool.
///
/// A load failure is always surfaced as an error, never as an empty pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("invalid question bank base URL")]
    InvalidBaseUrl,

    #[error("no question bank for category \"{0}\"")]
    UnknownCategory(String),

    #[error("question bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("malformed question record at index {index}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted by the quiz workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] ProviderError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted by `AccountService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccountError {
    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("an account already exists for this email")]
    AccountExists,

    #[error("no account found for this email")]
    UnknownAccount,

    #[error("incorrect password")]
    WrongPassword,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("corrupt stored record")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ThemeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
