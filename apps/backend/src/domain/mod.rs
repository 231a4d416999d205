//! Domain layer: pure game logic types and the per-session round engine.

pub mod difficulty;
pub mod moves;
pub mod session;

pub use difficulty::Difficulty;
pub use moves::{Move, Outcome};
pub use session::{RoundResult, Session, SessionId, SessionSummary, StatsSnapshot};
