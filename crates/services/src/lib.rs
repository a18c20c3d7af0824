#![forbid(unsafe_code)]

pub mod account;
pub mod error;
pub mod provider;
pub mod quiz;
pub mod theme;

pub use quiz_core::Clock;

pub use account::{AccountService, Profile};
pub use error::{AccountError, ProviderError, QuizError, ThemeError};
pub use provider::{HttpQuestionBank, QuestionBank, StaticQuestionBank, catalog};
pub use quiz::{
    LoadOutcome, LoadTicket, QuestionView, QuizProgress, QuizService, QuizSnapshot,
    ReviewEntryView, ReviewView, SessionHost,
};
pub use theme::{Theme, ThemeService};
