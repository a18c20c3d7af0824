use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("quiz size must be > 0")]
    InvalidQuizSize,
}

/// Configuration for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    quiz_size: u32,
}

impl QuizSettings {
    /// Number of questions drawn per attempt when the pool allows it.
    pub const DEFAULT_QUIZ_SIZE: u32 = 10;

    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuizSize` if `quiz_size` is zero.
    pub fn new(quiz_size: u32) -> Result<Self, SettingsError> {
        if quiz_size == 0 {
            return Err(SettingsError::InvalidQuizSize);
        }
        Ok(Self { quiz_size })
    }

    #[must_use]
    pub fn quiz_size(&self) -> u32 {
        self.quiz_size
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            quiz_size: Self::DEFAULT_QUIZ_SIZE,
        }
    }
}
