//! One player's game: history, scores, difficulty and the learning opponent.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::{Difficulty, Move, Outcome};
use crate::ai::PatternPredictor;

/// Length of generated session identifiers.
const SESSION_ID_LEN: usize = 12;

/// Opaque session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Fresh identifier: the first 12 hex digits of a v4 UUID.
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SESSION_ID_LEN);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything that happened in one round, plus the updated running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    #[serde(rename = "playerChoice")]
    pub player_move: Move,
    #[serde(rename = "aiChoice")]
    pub opponent_move: Move,
    #[serde(rename = "result")]
    pub outcome: Outcome,
    pub player_score: u32,
    #[serde(rename = "aiScore")]
    pub opponent_score: u32,
    #[serde(rename = "totalGames")]
    pub total_rounds: u32,
    #[serde(rename = "aiPatternCount")]
    pub pattern_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub player_score: u32,
    #[serde(rename = "aiScore")]
    pub opponent_score: u32,
    #[serde(rename = "totalGames")]
    pub total_rounds: u32,
    pub difficulty: Difficulty,
}

/// Derived statistics; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    #[serde(rename = "totalGames")]
    pub total_rounds: u32,
    pub player_score: u32,
    #[serde(rename = "aiScore")]
    pub opponent_score: u32,
    pub draws: u32,
    /// Player wins as a percentage of rounds, one decimal place.
    pub win_rate: f64,
    pub difficulty: Difficulty,
    #[serde(rename = "aiPatternCount")]
    pub pattern_count: usize,
}

/// A single long-lived mutable aggregate; there are no phases. Callers are
/// expected to hold it under a lock for the duration of each operation.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    player_score: u32,
    opponent_score: u32,
    total_rounds: u32,
    difficulty: Difficulty,
    history: Vec<Move>,
    predictor: PatternPredictor,
    last_activity: OffsetDateTime,
    seed: Option<u64>,
    rng: StdRng,
    evicted: bool,
}

impl Session {
    /// Create a fresh session.
    ///
    /// * `seed` - `Some` makes the opponent's random draws reproducible
    ///   (and [`Session::reset`] re-seeds); `None` draws from OS entropy.
    pub fn new(id: SessionId, seed: Option<u64>) -> Self {
        Self {
            id,
            player_score: 0,
            opponent_score: 0,
            total_rounds: 0,
            difficulty: Difficulty::default(),
            history: Vec::new(),
            predictor: PatternPredictor::new(),
            last_activity: OffsetDateTime::now_utc(),
            seed,
            rng: Self::make_rng(seed),
            evicted: false,
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// Play one round against the opponent.
    pub fn play_round(&mut self, player_move: Move) -> RoundResult {
        // Prediction only sees what happened before this round.
        let opponent_move = self
            .predictor
            .predict(&self.history, self.difficulty, &mut self.rng);

        self.history.push(player_move);
        self.predictor.learn(&self.history);

        let outcome = Outcome::determine(player_move, opponent_move);
        match outcome {
            Outcome::Win => self.player_score = self.player_score.saturating_add(1),
            Outcome::Lose => self.opponent_score = self.opponent_score.saturating_add(1),
            Outcome::Draw => {}
        }
        self.total_rounds = self.total_rounds.saturating_add(1);
        self.touch();

        RoundResult {
            player_move,
            opponent_move,
            outcome,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            total_rounds: self.total_rounds,
            pattern_count: self.predictor.pattern_count(),
        }
    }

    /// Return to the freshly created state. Idempotent.
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.total_rounds = 0;
        self.history.clear();
        self.predictor.reset();
        if self.seed.is_some() {
            self.rng = Self::make_rng(self.seed);
        }
        self.touch();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.touch();
    }

    pub fn stats(&self) -> StatsSnapshot {
        let draws = self
            .total_rounds
            .saturating_sub(self.player_score)
            .saturating_sub(self.opponent_score);
        let win_rate = if self.total_rounds == 0 {
            0.0
        } else {
            let pct = f64::from(self.player_score) / f64::from(self.total_rounds) * 100.0;
            // Ties to even: 6.25 reports as 6.2
            (pct * 10.0).round_ties_even() / 10.0
        };

        StatsSnapshot {
            total_rounds: self.total_rounds,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            draws,
            win_rate,
            difficulty: self.difficulty,
            pattern_count: self.predictor.pattern_count(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id.clone(),
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            total_rounds: self.total_rounds,
            difficulty: self.difficulty,
        }
    }

    /// True when the session has been inactive for longer than `ttl`.
    pub fn is_idle(&self, now: OffsetDateTime, ttl: Duration) -> bool {
        now - self.last_activity > ttl
    }

    /// Flag set by the store when the session is swept; a handle obtained
    /// before eviction must not be used to mutate it afterwards.
    pub fn mark_evicted(&mut self) {
        self.evicted = true;
    }

    pub fn is_evicted(&self) -> bool {
        self.evicted
    }

    fn touch(&mut self) {
        self.last_activity = OffsetDateTime::now_utc();
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.last_activity -= by;
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn pattern_count(&self) -> usize {
        self.predictor.pattern_count()
    }
}
