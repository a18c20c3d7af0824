use crate::model::session::{QuizSession, Selection, SessionError};

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Per-question verdict in a scored attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    prompt: String,
    your_answer: Selection,
    correct_answer: String,
    is_correct: bool,
}

impl ReportEntry {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn your_answer(&self) -> &Selection {
        &self.your_answer
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// Scored review of a submitted session.
///
/// Derived, never stored: scoring is a pure function of the frozen session
/// state, so calling it twice on the same session yields the same report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    entries: Vec<ReportEntry>,
    score: usize,
    total: usize,
}

impl QuizReport {
    /// Scores a submitted session.
    ///
    /// Correctness is exact string equality with the question's answer,
    /// case-sensitive, no trimming. An unanswered question is incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitted` if the session has not been
    /// submitted — scoring an editable session is a caller bug.
    pub fn for_session(session: &QuizSession) -> Result<Self, SessionError> {
        if !session.is_submitted() {
            return Err(SessionError::NotSubmitted);
        }

        let mut entries = Vec::with_capacity(session.len());
        let mut score = 0;
        for (i, question) in session.questions().iter().enumerate() {
            let your_answer = session.selection(i).cloned().unwrap_or_default();
            let is_correct = your_answer.text() == Some(question.answer());
            if is_correct {
                score += 1;
            }
            entries.push(ReportEntry {
                prompt: question.prompt().to_owned(),
                your_answer,
                correct_answer: question.answer().to_owned(),
                is_correct,
            });
        }

        Ok(Self {
            entries,
            score,
            total: session.len(),
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryKey, Question};
    use crate::time::fixed_now;

    fn geography_session() -> QuizSession {
        let questions = vec![
            Question::new(
                "Capital of France?",
                vec!["Paris".to_owned(), "Rome".to_owned()],
                "Paris",
            )
            .unwrap(),
            Question::new("2 + 2?", vec!["3".to_owned(), "4".to_owned()], "4").unwrap(),
            Question::new(
                "Sky color?",
                vec!["Blue".to_owned(), "Green".to_owned()],
                "Blue",
            )
            .unwrap(),
        ];
        QuizSession::new(CategoryKey::new("general").unwrap(), questions, fixed_now())
    }

    #[test]
    fn scoring_requires_submission() {
        let session = geography_session();
        let err = QuizReport::for_session(&session).unwrap_err();
        assert_eq!(err, SessionError::NotSubmitted);
    }

    #[test]
    fn scores_answered_unanswered_and_wrong() {
        let mut session = geography_session();
        session.record_answer(0, "Paris").unwrap();
        session.record_answer(2, "Green").unwrap();
        session.submit_incomplete(fixed_now()).unwrap();

        let report = QuizReport::for_session(&session).unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.score(), 1);

        let entries = report.entries();
        assert!(entries[0].is_correct());
        assert_eq!(entries[0].your_answer().text(), Some("Paris"));

        assert!(!entries[1].is_correct());
        assert_eq!(entries[1].your_answer(), &Selection::Unanswered);
        assert_eq!(entries[1].correct_answer(), "4");

        assert!(!entries[2].is_correct());
        assert_eq!(entries[2].your_answer().text(), Some("Green"));
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut session = geography_session();
        session.record_answer(0, "Paris").unwrap();
        session.submit_incomplete(fixed_now()).unwrap();

        let first = QuizReport::for_session(&session).unwrap();
        let second = QuizReport::for_session(&session).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn perfect_attempt_scores_full_marks() {
        let mut session = geography_session();
        session.record_answer(0, "Paris").unwrap();
        session.record_answer(1, "4").unwrap();
        session.record_answer(2, "Blue").unwrap();
        session.submit(fixed_now()).unwrap();

        let report = QuizReport::for_session(&session).unwrap();
        assert_eq!(report.score(), 3);
        assert_eq!(report.total(), 3);
        assert!(report.entries().iter().all(ReportEntry::is_correct));
    }

    #[test]
    fn empty_session_scores_zero_of_zero() {
        let mut session =
            QuizSession::new(CategoryKey::new("general").unwrap(), Vec::new(), fixed_now());
        session.submit(fixed_now()).unwrap();

        let report = QuizReport::for_session(&session).unwrap();
        assert_eq!(report.score(), 0);
        assert_eq!(report.total(), 0);
        assert!(report.entries().is_empty());
    }
}
