/// Aggregated view of quiz progression, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub round: u32,
    pub total_rounds: u32,
    pub score: u32,
    pub is_finished: bool,
}
