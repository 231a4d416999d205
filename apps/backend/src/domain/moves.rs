//! Moves, the cyclic beats-relation, and round outcomes.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// One of the three symbolic game choices.
///
/// Declaration order (Rock, Paper, Scissors) doubles as the tie-break order
/// wherever the opponent has to pick between equally likely moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Stable position of this move in [`Move::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move this one defeats.
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The unique move that defeats this one.
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn defeats(self, other: Move) -> bool {
        self.beats() == other
    }

    /// Uniformly random move.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses boundary tokens, case-insensitively. The Indonesian names sent by
/// the web client (`batu`, `kertas`, `gunting`) are accepted too.
impl FromStr for Move {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "batu" => Ok(Move::Rock),
            "paper" | "kertas" => Ok(Move::Paper),
            "scissors" | "gunting" => Ok(Move::Scissors),
            _ => Err(DomainError::invalid_move(s)),
        }
    }
}

/// Result of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Adjudicate `player` against `opponent`.
    pub fn determine(player: Move, opponent: Move) -> Outcome {
        if player == opponent {
            Outcome::Draw
        } else if player.defeats(opponent) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}
