use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use quiz_core::model::{CHOICES_PER_ROUND, Country, CountryCatalog, Round};

use crate::error::QuizError;

/// Draws one round from the catalog.
///
/// The catalog is deduplicated by display name (first occurrence wins), the
/// correct country is picked uniformly from the deduplicated pool, the
/// remaining choices are sampled without replacement, and the four are
/// shuffled into presentation order.
pub(crate) fn draw_round(
    catalog: &CountryCatalog,
    index: u32,
    rng: &mut impl Rng,
) -> Result<Round, QuizError> {
    let mut pool = dedupe_by_name(catalog);
    if pool.len() < CHOICES_PER_ROUND {
        return Err(QuizError::InsufficientData {
            available: pool.len(),
            needed: CHOICES_PER_ROUND,
        });
    }

    let correct = pool.swap_remove(rng.random_range(0..pool.len())).clone();

    let mut choices = Vec::with_capacity(CHOICES_PER_ROUND);
    for _ in 1..CHOICES_PER_ROUND {
        let picked = pool.swap_remove(rng.random_range(0..pool.len()));
        choices.push(picked.clone());
    }
    choices.push(correct.clone());
    choices.shuffle(rng);

    Ok(Round::new(correct, choices, index)?)
}

fn dedupe_by_name(catalog: &CountryCatalog) -> Vec<&Country> {
    let mut seen = HashSet::new();
    catalog.iter().filter(|c| seen.insert(c.name())).collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
