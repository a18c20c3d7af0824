use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::category::CategoryKey;
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question index {index} is out of range for a quiz of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("\"{option}\" is not an option of question {index}")]
    InvalidSelection { index: usize, option: String },

    #[error("session is already submitted")]
    AlreadySubmitted,

    #[error("session has not been submitted")]
    NotSubmitted,

    #[error("{} question(s) still unanswered", missing.len())]
    Unanswered { missing: Vec<usize> },
}

//
// ─── SELECTION ─────────────────────────────────────────────────────────────────
//

/// Answer slot for one question.
///
/// "Not yet answered" is a first-class state rather than a magic sentinel
/// value, so callers match instead of comparing against a marker string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unanswered,
    Answered(String),
}

impl Selection {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self, Selection::Answered(_))
    }

    /// The selected option text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Selection::Answered(text) => Some(text),
            Selection::Unanswered => None,
        }
    }
}

//
// ─── SUBMISSION CHECK ──────────────────────────────────────────────────────────
//

/// Outcome of validating a submission request.
///
/// Replaces a blocking confirmation dialog: the caller inspects the result
/// and decides whether to call [`QuizSession::submit_incomplete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionCheck {
    /// Every question has a recorded answer.
    Complete,
    /// Questions at these 0-based indices have no answer yet, ascending.
    Incomplete { missing: Vec<usize> },
}

impl SubmissionCheck {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, SubmissionCheck::Complete)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One in-progress or completed quiz attempt.
///
/// Single source of truth for the sampled question set, the cursor
/// position, per-question selections and the submission flag. All mutation
/// goes through the methods below; readers always see a consistent
/// snapshot because mutations never suspend.
///
/// The `submitted` flag is monotonic: once set, answers and the cursor are
/// frozen as far as scoring is concerned and further mutation attempts
/// return [`SessionError::AlreadySubmitted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    category: CategoryKey,
    questions: Vec<Question>,
    current: usize,
    selections: Vec<Selection>,
    submitted: bool,
    started_at: DateTime<Utc>,
    submitted_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Creates a fresh attempt over an already-sampled question set.
    ///
    /// The cursor starts at the first question, nothing is answered and
    /// the session is editable. A zero-question session is valid: every
    /// navigation is a no-op and submission is vacuously complete.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(category: CategoryKey, questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        let selections = vec![Selection::Unanswered; questions.len()];
        Self {
            category,
            questions,
            current: 0,
            selections,
            submitted: false,
            started_at,
            submitted_at: None,
        }
    }

    // Accessors
    #[must_use]
    pub fn category(&self) -> &CategoryKey {
        &self.category
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in this attempt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question under the cursor, or `None` for an empty session.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The selection recorded for `index`, or `None` out of range.
    #[must_use]
    pub fn selection(&self, index: usize) -> Option<&Selection> {
        self.selections.get(index)
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_answered()).count()
    }

    /// 0-based indices of questions with no recorded answer, ascending.
    #[must_use]
    pub fn unanswered_indices(&self) -> Vec<usize> {
        self.selections
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_answered())
            .map(|(i, _)| i)
            .collect()
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────
    //

    /// Moves the cursor to the next question.
    ///
    /// Purely positional: selections are untouched, so the previously
    /// recorded answer for the new position is still in place. At the last
    /// question this is a no-op and returns false.
    pub fn move_next(&mut self) -> bool {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor to the previous question.
    ///
    /// At the first question this is a no-op and returns false.
    pub fn move_prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    //
    // ─── RECORDING ─────────────────────────────────────────────────────────
    //

    /// Records the selection for the question at `index`, unconditionally
    /// overwriting any prior selection. Callable any number of times, in
    /// any order, until submission.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitted` after submission,
    /// `SessionError::OutOfRange` for a bad index, and
    /// `SessionError::InvalidSelection` if `option` is not among that
    /// question's options — the latter two are caller bugs, not user
    /// errors, and must not be swallowed.
    pub fn record_answer(
        &mut self,
        index: usize,
        option: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        let option = option.into();
        let Some(question) = self.questions.get(index) else {
            return Err(SessionError::OutOfRange {
                index,
                len: self.questions.len(),
            });
        };
        if !question.has_option(&option) {
            return Err(SessionError::InvalidSelection { index, option });
        }
        self.selections[index] = Selection::Answered(option);
        Ok(())
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────
    //

    /// Validates a submission request without changing anything.
    #[must_use]
    pub fn check_submission(&self) -> SubmissionCheck {
        let missing = self.unanswered_indices();
        if missing.is_empty() {
            SubmissionCheck::Complete
        } else {
            SubmissionCheck::Incomplete { missing }
        }
    }

    /// Submits a fully answered session.
    ///
    /// Irreversible: a fresh session is required to retry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitted` on a second submission and
    /// `SessionError::Unanswered` when questions are missing answers — use
    /// [`Self::submit_incomplete`] after explicit user confirmation.
    pub fn submit(&mut self, submitted_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        match self.check_submission() {
            SubmissionCheck::Complete => {
                self.seal(submitted_at);
                Ok(())
            }
            SubmissionCheck::Incomplete { missing } => Err(SessionError::Unanswered { missing }),
        }
    }

    /// Submits despite unanswered questions.
    ///
    /// The caller must have obtained explicit confirmation, naming the
    /// missing question numbers from [`Self::check_submission`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitted` on a second submission.
    pub fn submit_incomplete(&mut self, submitted_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        self.seal(submitted_at);
        Ok(())
    }

    fn seal(&mut self, submitted_at: DateTime<Utc>) {
        self.submitted = true;
        self.submitted_at = Some(submitted_at);
    }
}

impl fmt::Display for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quiz \"{}\": {}/{} answered, question {}/{}",
            self.category,
            self.answered_count(),
            self.len(),
            self.current + 1,
            self.len()
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
