use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Opponent strength. Higher noise means the opponent ignores its
/// prediction more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "easy", alias = "relaxed")]
    Relaxed,
    #[default]
    #[serde(rename = "normal", alias = "standard")]
    Standard,
    #[serde(rename = "hard", alias = "challenging")]
    Challenging,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Relaxed,
        Difficulty::Standard,
        Difficulty::Challenging,
    ];

    /// Probability of playing a uniformly random move instead of the counter.
    pub const fn noise_rate(self) -> f64 {
        match self {
            Difficulty::Relaxed => 0.7,
            Difficulty::Standard => 0.3,
            Difficulty::Challenging => 0.1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Relaxed => "easy",
            Difficulty::Standard => "normal",
            Difficulty::Challenging => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "relaxed" => Ok(Difficulty::Relaxed),
            "normal" | "standard" => Ok(Difficulty::Standard),
            "hard" | "challenging" => Ok(Difficulty::Challenging),
            _ => Err(DomainError::invalid_difficulty(s)),
        }
    }
}
