//! Adaptive opponent.
//!
//! This module provides:
//! - [`PatternTable`]: learned follow-up counts keyed by short move subsequences
//! - [`PatternPredictor`]: predicts the player's next move and plays its counter

mod pattern_table;
mod predictor;

pub use pattern_table::{FollowCounts, PatternKey, PatternTable, MAX_PATTERN_LEN};
pub use predictor::PatternPredictor;
