use quiz_core::model::QuizSession;

/// Aggregated view of attempt progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    /// 0-based cursor position.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub submitted: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let total = session.len();
        let answered = session.answered_count();
        Self {
            position: session.current_index(),
            total,
            answered,
            remaining: total.saturating_sub(answered),
            submitted: session.is_submitted(),
        }
    }
}
