mod quiz_vm;

pub use quiz_vm::{OptionVm, QuizOutcome, QuizVm, RoundVm, start_quiz};
