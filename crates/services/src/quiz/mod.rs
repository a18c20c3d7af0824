mod host;
mod progress;
mod sample;
mod service;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use host::{LoadOutcome, LoadTicket, SessionHost};
pub use progress::QuizProgress;
pub use sample::{draw, draw_with_rng};
pub use service::QuizService;
pub use view::{NO_ANSWER, QuestionView, QuizSnapshot, ReviewEntryView, ReviewView};
