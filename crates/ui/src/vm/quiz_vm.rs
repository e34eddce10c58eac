use quiz_core::model::QuizSummary;
use services::{
    Advance, AnswerOutcome, CatalogSource, QuizEngine, QuizError, QuizPhase, TOTAL_ROUNDS,
};

use crate::views::ViewError;

/// One answer button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub class: &'static str,
}

/// Render data for the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundVm {
    pub question_label: String,
    pub flag_src: String,
    pub flag_alt: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Finished,
}

/// View model owning the quiz engine.
///
/// Translates user intents into engine calls and engine results into render
/// data; no quiz logic lives here.
pub struct QuizVm {
    engine: QuizEngine,
    chosen: Option<String>,
    last_answer: Option<AnswerOutcome>,
    summary: Option<QuizSummary>,
}

impl QuizVm {
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.engine.phase()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    #[must_use]
    pub fn asked(&self) -> u32 {
        self.engine.rounds_played()
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        TOTAL_ROUNDS
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn round(&self) -> Option<RoundVm> {
        let round = self.engine.current_round()?;
        let correct = round.correct();

        let options = round
            .choices()
            .iter()
            .map(|choice| OptionVm {
                label: choice.name().to_owned(),
                class: self.option_class(choice.name()),
            })
            .collect();

        Some(RoundVm {
            question_label: format!("Question {} of {}", round.index(), TOTAL_ROUNDS),
            flag_src: correct.flag().as_str().to_owned(),
            flag_alt: correct.flag_alt(),
            options,
        })
    }

    /// Message line under the options, empty while a round is open.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if let Some(summary) = &self.summary {
            return Some(format!(
                "Game over — your score: {} / {}",
                summary.score(),
                summary.total_rounds()
            ));
        }

        self.last_answer.as_ref().map(|answer| {
            if answer.was_correct {
                "Correct! 🎉".to_owned()
            } else {
                format!("Wrong — correct answer: {}", answer.correct_name)
            }
        })
    }

    /// Answer the current round with the given option label.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when the engine rejects the transition.
    pub fn select(&mut self, option: &str) -> Result<(), ViewError> {
        let outcome = self.engine.answer(option).map_err(|err| map_quiz_error(&err))?;
        self.chosen = Some(option.to_owned());
        self.last_answer = Some(outcome);
        Ok(())
    }

    /// Move to the next round, or finish the quiz after the last one.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when the engine rejects the transition.
    pub fn next(&mut self) -> Result<QuizOutcome, ViewError> {
        let advance = self.engine.advance().map_err(|err| map_quiz_error(&err))?;
        self.chosen = None;
        self.last_answer = None;

        match advance {
            Advance::Next => Ok(QuizOutcome::Continue),
            Advance::Finished(summary) => {
                self.summary = Some(summary);
                Ok(QuizOutcome::Finished)
            }
        }
    }

    /// Start over with the same catalog.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` when the catalog can no longer form a round.
    pub fn restart(&mut self) -> Result<(), ViewError> {
        self.engine.restart().map_err(|err| map_quiz_error(&err))?;
        self.chosen = None;
        self.last_answer = None;
        self.summary = None;
        Ok(())
    }

    // Highlighting after scoring: the correct button is always marked, the
    // chosen one additionally when it was wrong.
    fn option_class(&self, label: &str) -> &'static str {
        let (Some(answer), Some(chosen)) = (&self.last_answer, &self.chosen) else {
            return "option";
        };

        if label == answer.correct_name {
            "option correct"
        } else if label == chosen.as_str() {
            "option wrong"
        } else {
            "option"
        }
    }
}

/// Load the catalog once and start a quiz over it.
///
/// # Errors
///
/// Returns `ViewError::DataUnavailable` when the load fails and
/// `ViewError::InsufficientData` when too few countries survive filtering
/// to form a round.
pub async fn start_quiz(source: &dyn CatalogSource) -> Result<QuizVm, ViewError> {
    let catalog = source
        .load()
        .await
        .map_err(|_| ViewError::DataUnavailable)?;

    let mut engine = QuizEngine::new(catalog);
    engine.start().map_err(|err| map_quiz_error(&err))?;

    Ok(QuizVm {
        engine,
        chosen: None,
        last_answer: None,
        summary: None,
    })
}

fn map_quiz_error(err: &QuizError) -> ViewError {
    match err {
        QuizError::InsufficientData { .. } => ViewError::InsufficientData,
        _ => ViewError::Unknown,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::{Country, CountryCatalog, FlagUri};
    use services::CatalogError;

    struct FixedSource {
        countries: Vec<Country>,
    }

    impl FixedSource {
        fn with_names(names: &[&str]) -> Self {
            let countries = names
                .iter()
                .map(|name| {
                    let flag =
                        FlagUri::parse(format!("https://flags.example/{name}.svg")).unwrap();
                    Country::new(*name, flag).unwrap()
                })
                .collect();
            Self { countries }
        }
    }

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn load(&self) -> Result<CountryCatalog, CatalogError> {
            let catalog = CountryCatalog::new(self.countries.clone());
            if catalog.is_empty() {
                return Err(CatalogError::EmptyCatalog);
            }
            Ok(catalog)
        }
    }

    #[tokio::test]
    async fn start_quiz_builds_the_first_round() {
        let source = FixedSource::with_names(&["A", "B", "C", "D", "E"]);
        let vm = start_quiz(&source).await.unwrap();

        assert_eq!(vm.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(vm.asked(), 1);
        assert!(vm.message().is_none());

        let round = vm.round().unwrap();
        assert_eq!(round.question_label, "Question 1 of 10");
        assert_eq!(round.options.len(), 4);
        assert!(round.flag_alt.starts_with("Flag of "));
        assert!(round.options.iter().all(|option| option.class == "option"));
    }

    #[tokio::test]
    async fn select_then_next_drives_the_loop() {
        let source = FixedSource::with_names(&["A", "B", "C", "D", "E"]);
        let mut vm = start_quiz(&source).await.unwrap();

        let first = vm.round().unwrap().options[0].label.clone();
        vm.select(&first).unwrap();
        assert_eq!(vm.phase(), QuizPhase::RoundScored);
        assert!(vm.message().is_some());

        // Scoring twice in one round is a UI bug; the engine refuses it.
        assert!(vm.select(&first).is_err());

        assert_eq!(vm.next().unwrap(), QuizOutcome::Continue);
        assert_eq!(vm.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(vm.asked(), 2);
        assert!(vm.message().is_none());
    }

    #[tokio::test]
    async fn scored_round_highlights_the_correct_option() {
        let source = FixedSource::with_names(&["A", "B", "C", "D", "E"]);
        let mut vm = start_quiz(&source).await.unwrap();

        let first = vm.round().unwrap().options[0].label.clone();
        vm.select(&first).unwrap();

        let round = vm.round().unwrap();
        let marked: Vec<_> = round
            .options
            .iter()
            .filter(|option| option.class != "option")
            .collect();
        assert!(!marked.is_empty());
        assert!(
            marked
                .iter()
                .any(|option| option.class == "option correct")
        );
    }

    #[tokio::test]
    async fn finishing_the_quiz_yields_a_summary() {
        let source = FixedSource::with_names(&["A", "B", "C", "D", "E"]);
        let mut vm = start_quiz(&source).await.unwrap();

        let mut outcome = QuizOutcome::Continue;
        for _ in 0..vm.total_rounds() {
            let first = vm.round().unwrap().options[0].label.clone();
            vm.select(&first).unwrap();
            outcome = vm.next().unwrap();
        }

        assert_eq!(outcome, QuizOutcome::Finished);
        assert_eq!(vm.phase(), QuizPhase::Finished);
        let summary = vm.summary().unwrap();
        assert!(summary.score() <= summary.total_rounds());
        assert!(vm.message().unwrap().starts_with("Game over"));

        vm.restart().unwrap();
        assert_eq!(vm.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(vm.score(), 0);
        assert!(vm.summary().is_none());
        assert!(vm.message().is_none());
    }

    #[tokio::test]
    async fn empty_source_maps_to_data_unavailable() {
        let source = FixedSource { countries: Vec::new() };
        let err = start_quiz(&source).await.unwrap_err();
        assert_eq!(err, ViewError::DataUnavailable);
    }

    #[tokio::test]
    async fn small_catalog_maps_to_insufficient_data() {
        let source = FixedSource::with_names(&["A", "B", "C"]);
        let err = start_quiz(&source).await.unwrap_err();
        assert_eq!(err, ViewError::InsufficientData);
    }
}
