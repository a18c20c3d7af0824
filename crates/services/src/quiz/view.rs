use quiz_core::model::{QuizReport, QuizSession, Selection};

use super::progress::QuizProgress;

/// Sentinel a renderer shows for a question that was never answered.
pub const NO_ANSWER: &str = "no answer";

//
// ─── QUESTION VIEW ─────────────────────────────────────────────────────────────
//

/// Renderer-facing picture of one question.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings beyond the raw prompt/options
/// - no layout or theming assumptions
///
/// `selected` is restored from the session on every build, so revisiting
/// a question shows its recorded answer rather than transient UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 0-based question index.
    pub index: usize,
    /// 1-based number for display.
    pub number: usize,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the recorded selection, if any.
    pub selected: Option<usize>,
}

impl QuestionView {
    /// View of the question at `index`, or `None` out of range.
    #[must_use]
    pub fn of(session: &QuizSession, index: usize) -> Option<Self> {
        let question = session.question(index)?;
        let selected = session
            .selection(index)
            .and_then(Selection::text)
            .and_then(|text| question.options().iter().position(|opt| opt == text));
        Some(Self {
            index,
            number: index + 1,
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            selected,
        })
    }
}

/// Read-only snapshot of the attempt: the question under the cursor plus
/// progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    /// `None` only for an empty (zero-question) session.
    pub current: Option<QuestionView>,
    pub progress: QuizProgress,
}

impl QuizSnapshot {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        Self {
            current: QuestionView::of(session, session.current_index()),
            progress: QuizProgress::of(session),
        }
    }
}

//
// ─── REVIEW VIEW ───────────────────────────────────────────────────────────────
//

/// Per-question line of the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntryView {
    /// 1-based number for display.
    pub number: usize,
    pub prompt: String,
    /// The recorded answer, or [`NO_ANSWER`].
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Post-submission review: per-question verdicts plus the aggregate score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub entries: Vec<ReviewEntryView>,
    pub score: usize,
    pub total: usize,
}

impl ReviewView {
    #[must_use]
    pub fn from_report(report: &QuizReport) -> Self {
        let entries = report
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| ReviewEntryView {
                number: i + 1,
                prompt: entry.prompt().to_owned(),
                your_answer: entry
                    .your_answer()
                    .text()
                    .map_or_else(|| NO_ANSWER.to_owned(), ToOwned::to_owned),
                correct_answer: entry.correct_answer().to_owned(),
                is_correct: entry.is_correct(),
            })
            .collect();
        Self {
            entries,
            score: report.score(),
            total: report.total(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
