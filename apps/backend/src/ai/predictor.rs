//! Pattern-learning opponent.
//!
//! The predictor looks at the player's most recent moves, finds the longest
//! trailing subsequence it has seen before, and assumes the player will
//! repeat whatever most often followed it. It then plays the counter, unless
//! the difficulty's noise roll tells it to play at random.

use rand::Rng;
use tracing::trace;

use super::pattern_table::{PatternKey, PatternTable, MAX_PATTERN_LEN};
use crate::domain::{Difficulty, Move};

/// Minimum history before the predictor attempts pattern matching.
const MIN_HISTORY: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct PatternPredictor {
    table: PatternTable,
}

impl PatternPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the opponent's move for this round.
    ///
    /// `history` must be the player's moves *before* the move being played.
    pub fn predict<R: Rng + ?Sized>(
        &self,
        history: &[Move],
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Move {
        let Some(predicted) = self.predicted_move(history) else {
            return Move::random(rng);
        };

        if rng.random::<f64>() < difficulty.noise_rate() {
            trace!(%predicted, %difficulty, "noise roll hit, playing random");
            return Move::random(rng);
        }

        predicted.counter()
    }

    /// The player's most likely next move according to the table, or `None`
    /// when history is too short or no trailing subsequence is known.
    pub fn predicted_move(&self, history: &[Move]) -> Option<Move> {
        if history.len() < MIN_HISTORY {
            return None;
        }

        let longest = MAX_PATTERN_LEN.min(history.len());
        (1..=longest).rev().find_map(|len| {
            let key = PatternKey::new(&history[history.len() - len..])?;
            self.table.lookup(&key)?.most_frequent()
        })
    }

    /// Re-derive counts from the full `history`, which must already include
    /// the newest move. Every call adds the increments again, so call it
    /// exactly once per appended move.
    pub fn learn(&mut self, history: &[Move]) {
        if history.len() < MIN_HISTORY {
            return;
        }

        let longest = MAX_PATTERN_LEN.min(history.len() - 1);
        for len in 1..=longest {
            for window in history.windows(len + 1) {
                let (prefix, next) = window.split_at(len);
                if let Some(key) = PatternKey::new(prefix) {
                    self.table.observe(key, next[0]);
                }
            }
        }
    }

    /// Number of distinct subsequences learned so far.
    pub fn pattern_count(&self) -> usize {
        self.table.len()
    }

    pub fn reset(&mut self) {
        self.table.clear();
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }
}
