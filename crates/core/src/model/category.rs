use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category key cannot be empty")]
    EmptyKey,

    #[error("category key may only contain lowercase letters, digits and underscores")]
    InvalidKey,

    #[error("category title cannot be empty")]
    EmptyTitle,
}

//
// ─── KEY ───────────────────────────────────────────────────────────────────────
//

/// Key of a question-bank category (e.g. `programming`).
///
/// Keys double as file names at the provider, so they are restricted to
/// `[a-z0-9_]`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Creates a validated category key.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyKey` for a blank key and
    /// `CategoryError::InvalidKey` for characters outside `[a-z0-9_]`.
    pub fn new(key: impl Into<String>) -> Result<Self, CategoryError> {
        let key = key.into();
        let key = key.trim().to_owned();
        if key.is_empty() {
            return Err(CategoryError::EmptyKey);
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(CategoryError::InvalidKey);
        }
        Ok(Self(key))
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryKey({})", self.0)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryKey {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A dashboard entry pairing a key with its display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    key: CategoryKey,
    title: String,
}

impl Category {
    /// Creates a new category entry.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyTitle` if the title is blank.
    pub fn new(key: CategoryKey, title: impl Into<String>) -> Result<Self, CategoryError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CategoryError::EmptyTitle);
        }
        Ok(Self {
            key,
            title: title.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
