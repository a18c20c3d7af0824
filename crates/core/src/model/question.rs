use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("answer must equal exactly one of the options")]
    AnswerNotAnOption,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Immutable once built. The constructor validates shape so the session and
/// scorer can rely on `answer` naming exactly one element of `options`
/// (byte-for-byte, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Creates a validated question.
    ///
    /// Duplicate option text is allowed, except for the answer: an answer
    /// matching zero or several options is rejected.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank,
    /// `QuestionError::TooFewOptions` for fewer than two options, and
    /// `QuestionError::AnswerNotAnOption` unless `answer` equals exactly one
    /// element of `options`.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions { len: options.len() });
        }
        let answer = answer.into();
        if options.iter().filter(|opt| **opt == answer).count() != 1 {
            return Err(QuestionError::AnswerNotAnOption);
        }

        Ok(Self {
            prompt: prompt.trim().to_owned(),
            options,
            answer,
        })
    }

    // Accessors
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns true if `text` is one of this question's options.
    #[must_use]
    pub fn has_option(&self, text: &str) -> bool {
        self.options.iter().any(|opt| opt == text)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
