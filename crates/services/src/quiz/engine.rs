use chrono::{DateTime, Utc};

use quiz_core::Clock;
use quiz_core::model::{CountryCatalog, QuizSummary, Round};

use super::planner;
use super::progress::QuizProgress;
use crate::error::QuizError;

/// Number of rounds in a full quiz.
pub const TOTAL_ROUNDS: u32 = 10;

//
// ─── PHASES & RESULTS ──────────────────────────────────────────────────────────
//

/// Where the engine currently is in its round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    AwaitingAnswer,
    RoundScored,
    Finished,
}

/// Outcome of answering the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub was_correct: bool,
    pub correct_name: String,
    pub score: u32,
}

/// Result of advancing past a scored round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A fresh round is awaiting an answer.
    Next,
    /// The quiz is over.
    Finished(QuizSummary),
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Mutable quiz progression. One instance, owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionState {
    score: u32,
    rounds_played: u32,
    phase: QuizPhase,
}

impl SessionState {
    fn fresh() -> Self {
        Self {
            score: 0,
            rounds_played: 0,
            phase: QuizPhase::NotStarted,
        }
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Owns quiz progression: the current round, the score, and the phase
/// transitions between them.
///
/// The catalog is pulled from the provider once, before construction;
/// every engine operation is synchronous and runs on the in-memory list.
/// Callers serialize operations; the engine is not re-entrant.
#[derive(Debug)]
pub struct QuizEngine {
    catalog: CountryCatalog,
    state: SessionState,
    current: Option<Round>,
    started_at: Option<DateTime<Utc>>,
    clock: Clock,
}

impl QuizEngine {
    /// Creates an engine over a loaded catalog. No round exists until
    /// `start` is called.
    #[must_use]
    pub fn new(catalog: CountryCatalog) -> Self {
        Self {
            catalog,
            state: SessionState::fresh(),
            current: None,
            started_at: None,
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Rounds generated so far, the current one included.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.state.rounds_played
    }

    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            round: self.state.rounds_played,
            total_rounds: TOTAL_ROUNDS,
            score: self.state.score,
            is_finished: self.state.phase == QuizPhase::Finished,
        }
    }

    /// Begins a quiz: resets score and round counters and draws round 1.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InsufficientData` when the catalog cannot form
    /// four distinct choices.
    pub fn start(&mut self) -> Result<&Round, QuizError> {
        self.state = SessionState::fresh();
        self.current = None;
        self.started_at = Some(self.clock.now());
        self.next_round()
    }

    /// Resets to the state produced by `start`. Valid from any phase.
    ///
    /// # Errors
    ///
    /// Same conditions as `start`.
    pub fn restart(&mut self) -> Result<&Round, QuizError> {
        self.start()
    }

    /// Scores the current round against the chosen name (exact match).
    ///
    /// Scoring happens exactly once per round; a second call before
    /// `advance` is rejected.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `AwaitingAnswer`.
    pub fn answer(&mut self, chosen_name: &str) -> Result<AnswerOutcome, QuizError> {
        let Some(round) = self.current.as_ref() else {
            return Err(self.invalid_transition("answer"));
        };
        if self.state.phase != QuizPhase::AwaitingAnswer {
            return Err(self.invalid_transition("answer"));
        }

        let was_correct = round.is_correct(chosen_name);
        if was_correct {
            self.state.score += 1;
        }
        self.state.phase = QuizPhase::RoundScored;

        Ok(AnswerOutcome {
            was_correct,
            correct_name: round.correct().name().to_owned(),
            score: self.state.score,
        })
    }

    /// Moves past a scored round: draws the next one or finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `RoundScored` and
    /// propagates round-drawing failures.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        if self.state.phase != QuizPhase::RoundScored {
            return Err(self.invalid_transition("advance"));
        }

        if self.state.rounds_played >= TOTAL_ROUNDS {
            self.state.phase = QuizPhase::Finished;
            self.current = None;

            let finished_at = self.clock.now();
            let started_at = self.started_at.unwrap_or(finished_at);
            let summary =
                QuizSummary::new(self.state.score, TOTAL_ROUNDS, started_at, finished_at)?;
            return Ok(Advance::Finished(summary));
        }

        self.next_round()?;
        Ok(Advance::Next)
    }

    fn next_round(&mut self) -> Result<&Round, QuizError> {
        let mut rng = rand::rng();
        let round = planner::draw_round(&self.catalog, self.state.rounds_played + 1, &mut rng)?;

        self.state.rounds_played += 1;
        self.state.phase = QuizPhase::AwaitingAnswer;
        Ok(self.current.insert(round))
    }

    fn invalid_transition(&self, operation: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            operation,
            phase: self.state.phase,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
