use quiz_core::model::{CategoryKey, QuizSession};

use super::service::QuizService;
use crate::error::QuizError;

//
// ─── LOAD TRACKING ─────────────────────────────────────────────────────────────
//

/// Identifies one category load. Only the newest ticket may install its
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// What became of a resolved load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The ticket was still the newest one and its result took effect.
    Applied,
    /// A newer load was issued meanwhile; the result was discarded.
    Stale,
}

//
// ─── HOST ──────────────────────────────────────────────────────────────────────
//

/// Owns the one live session and serializes category loads.
///
/// Each load gets a generation ticket; issuing a new load invalidates
/// every outstanding ticket, so a slow earlier response can never clobber
/// a later request — last *issued* wins, not last *resolved*. While a
/// load is pending no session is exposed, which keeps navigation,
/// recording and submission away from a not-yet-populated attempt.
#[derive(Debug, Default)]
pub struct SessionHost {
    session: Option<QuizSession>,
    generation: u64,
    pending: Option<CategoryKey>,
}

impl SessionHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if any. `None` while a load is pending.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Mutable access to the active session for navigation, recording and
    /// submission.
    #[must_use]
    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        self.session.as_mut()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The category currently being loaded, if any.
    #[must_use]
    pub fn loading_category(&self) -> Option<&CategoryKey> {
        self.pending.as_ref()
    }

    /// Issues a new load: discards the current session, enters the
    /// pending state and invalidates every earlier ticket.
    pub fn begin_load(&mut self, category: CategoryKey) -> LoadTicket {
        self.generation += 1;
        self.session = None;
        self.pending = Some(category);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Installs a resolved load as the active session.
    ///
    /// A stale ticket leaves the host untouched.
    pub fn install(&mut self, ticket: LoadTicket, session: QuizSession) -> LoadOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale pool for \"{}\" (superseded load)",
                session.category()
            );
            return LoadOutcome::Stale;
        }
        self.pending = None;
        self.session = Some(session);
        LoadOutcome::Applied
    }

    /// Records a failed load, clearing the pending state.
    ///
    /// A stale ticket leaves the host untouched; the dashboard keeps
    /// whatever state the newest load produces.
    pub fn fail(&mut self, ticket: LoadTicket) -> LoadOutcome {
        if ticket.generation != self.generation {
            return LoadOutcome::Stale;
        }
        self.pending = None;
        LoadOutcome::Applied
    }

    /// Leaves the current attempt (e.g. returning to the dashboard after
    /// review). The session is dropped, not persisted.
    pub fn abandon(&mut self) {
        self.session = None;
    }

    /// `begin_load` → [`QuizService::begin`] → `install`, in one call.
    ///
    /// If another load is issued while this one awaits the bank, the
    /// slower result is discarded on arrival.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError` from the bank; the failure clears the
    /// pending state only when this load is still the newest.
    pub async fn open(
        &mut self,
        service: &QuizService,
        category: CategoryKey,
    ) -> Result<LoadOutcome, QuizError> {
        let ticket = self.begin_load(category.clone());
        match service.begin(&category).await {
            Ok(session) => Ok(self.install(ticket, session)),
            Err(err) => {
                self.fail(ticket);
                Err(err)
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;
    use quiz_core::time::fixed_now;

    fn key(name: &str) -> CategoryKey {
        CategoryKey::new(name).unwrap()
    }

    fn session_for(name: &str) -> QuizSession {
        let questions = vec![
            Question::new("Q?", vec!["A".to_owned(), "B".to_owned()], "A").unwrap(),
        ];
        QuizSession::new(key(name), questions, fixed_now())
    }

    #[test]
    fn pending_load_hides_the_session() {
        let mut host = SessionHost::new();
        let ticket = host.begin_load(key("devops"));
        host.install(ticket, session_for("devops"));
        assert!(host.session().is_some());

        host.begin_load(key("programming"));
        assert!(host.session().is_none());
        assert!(host.is_loading());
        assert_eq!(host.loading_category(), Some(&key("programming")));
    }

    #[test]
    fn newest_load_wins_when_resolutions_arrive_in_order() {
        let mut host = SessionHost::new();
        let first = host.begin_load(key("devops"));
        let second = host.begin_load(key("programming"));

        assert_eq!(host.install(first, session_for("devops")), LoadOutcome::Stale);
        assert!(host.session().is_none());

        assert_eq!(
            host.install(second, session_for("programming")),
            LoadOutcome::Applied
        );
        assert_eq!(host.session().unwrap().category(), &key("programming"));
        assert!(!host.is_loading());
    }

    #[test]
    fn newest_load_wins_when_resolutions_arrive_out_of_order() {
        let mut host = SessionHost::new();
        let first = host.begin_load(key("devops"));
        let second = host.begin_load(key("programming"));

        assert_eq!(
            host.install(second, session_for("programming")),
            LoadOutcome::Applied
        );
        assert_eq!(host.install(first, session_for("devops")), LoadOutcome::Stale);
        assert_eq!(host.session().unwrap().category(), &key("programming"));
    }

    #[test]
    fn stale_failure_does_not_clear_newer_pending_load() {
        let mut host = SessionHost::new();
        let first = host.begin_load(key("devops"));
        let _second = host.begin_load(key("programming"));

        assert_eq!(host.fail(first), LoadOutcome::Stale);
        assert!(host.is_loading());
    }

    #[test]
    fn current_failure_clears_the_pending_state() {
        let mut host = SessionHost::new();
        let ticket = host.begin_load(key("devops"));
        assert_eq!(host.fail(ticket), LoadOutcome::Applied);
        assert!(!host.is_loading());
        assert!(host.session().is_none());
    }

    #[test]
    fn abandon_drops_the_session() {
        let mut host = SessionHost::new();
        let ticket = host.begin_load(key("devops"));
        host.install(ticket, session_for("devops"));

        host.abandon();
        assert!(host.session().is_none());
        assert!(!host.is_loading());
    }
}
