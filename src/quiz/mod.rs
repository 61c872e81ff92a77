//! Quiz catalogue data model and raw answer selections.
//!
//! The catalogue is immutable reference data owned by the caller and passed
//! explicitly into the engine; [`QuizCatalogue::standard`] ships the
//! production questionnaire for demos and tests.

pub mod answers;
pub mod catalogue;
mod standard;

pub use answers::{AnswerValue, QuizAnswers};
pub use catalogue::{category, GoalTag, QuestionKind, QuizCatalogue, QuizOption, QuizQuestion};
