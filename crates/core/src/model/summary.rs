use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total rounds ({total_rounds})")]
    ScoreOutOfRange { score: u32, total_rounds: u32 },
}

/// Final result of a completed quiz.
///
/// Held in memory for the finished screen only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    score: u32,
    total_rounds: u32,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Builds a summary for a finished quiz.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `finished_at` is before
    /// `started_at`, and `SummaryError::ScoreOutOfRange` if the score
    /// exceeds the round count.
    pub fn new(
        score: u32,
        total_rounds: u32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if finished_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if score > total_rounds {
            return Err(SummaryError::ScoreOutOfRange {
                score,
                total_rounds,
            });
        }

        Ok(Self {
            score,
            total_rounds,
            started_at,
            finished_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn summary_accepts_equal_timestamps() {
        let now = fixed_now();
        let summary = QuizSummary::new(7, 10, now, now).unwrap();
        assert_eq!(summary.score(), 7);
        assert_eq!(summary.total_rounds(), 10);
    }

    #[test]
    fn summary_rejects_reversed_time_range() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(30);
        let err = QuizSummary::new(3, 10, now, earlier).unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn summary_rejects_score_above_total() {
        let now = fixed_now();
        let err = QuizSummary::new(11, 10, now, now).unwrap_err();
        assert!(matches!(err, SummaryError::ScoreOutOfRange { score: 11, .. }));
    }
}
