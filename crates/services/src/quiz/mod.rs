mod engine;
mod planner;
mod progress;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{Advance, AnswerOutcome, QuizEngine, QuizPhase, TOTAL_ROUNDS};
pub use progress::QuizProgress;
pub use quiz_core::model::CHOICES_PER_ROUND;
