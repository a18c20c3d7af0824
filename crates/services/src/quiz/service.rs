use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{CategoryKey, QuizReport, QuizSession, QuizSettings};

use super::sample;
use super::view::ReviewView;
use crate::error::QuizError;
use crate::provider::QuestionBank;

/// Builds fresh quiz sessions from a question bank and scores finished
/// ones.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<dyn QuestionBank>,
    settings: QuizSettings,
    clock: Clock,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self {
            bank,
            settings: QuizSettings::default(),
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Begins a fresh attempt for `category`.
    ///
    /// Loads the category's pool, samples up to `quiz_size` questions and
    /// returns a brand-new session. Every call is independent; nothing of
    /// a previous attempt carries over.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` when the question bank fails; a failed
    /// load produces no session at all.
    pub async fn begin(&self, category: &CategoryKey) -> Result<QuizSession, QuizError> {
        let pool = self.bank.load(category).await?;
        let size = usize::try_from(self.settings.quiz_size()).unwrap_or(usize::MAX);
        let questions = sample::draw(&pool, size);
        log::debug!(
            "beginning quiz for \"{category}\": {} of {} pooled questions",
            questions.len(),
            pool.len()
        );
        Ok(QuizSession::new(
            category.clone(),
            questions,
            self.clock.now(),
        ))
    }

    /// Scores a submitted session into a renderable review.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the session has not been submitted.
    pub fn review(&self, session: &QuizSession) -> Result<ReviewView, QuizError> {
        let report = QuizReport::for_session(session)?;
        Ok(ReviewView::from_report(&report))
    }
}
