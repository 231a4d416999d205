//! Session service.
//!
//! Resolves session ids through the injected [`SessionStore`], parses
//! boundary tokens, and runs each engine operation under the session's lock.
//! Tokens are validated before the store is consulted, so an invalid move
//! or difficulty never touches session state.

use std::sync::Arc;

use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::domain::{
    Difficulty, Move, RoundResult, Session, SessionId, SessionSummary, StatsSnapshot,
};
use crate::errors::domain::DomainError;
use crate::store::SessionStore;

#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn create_session(&self) -> SessionId {
        let handle = self.store.create();
        let id = handle.lock().id().clone();
        info!(session_id = %id, "session created");
        id
    }

    pub fn summary(&self, id: &SessionId) -> Result<SessionSummary, DomainError> {
        self.with_session(id, |session| session.summary())
    }

    /// Play one round.
    ///
    /// # Errors
    /// * `InvalidMove` - `move_token` is not a recognized move
    /// * `NotFound` - unknown, deleted or expired session
    pub fn play_round(&self, id: &SessionId, move_token: &str) -> Result<RoundResult, DomainError> {
        let player_move: Move = move_token.parse()?;
        let result = self.with_session(id, |session| session.play_round(player_move))?;
        debug!(
            session_id = %id,
            player = %result.player_move,
            opponent = %result.opponent_move,
            outcome = ?result.outcome,
            patterns = result.pattern_count,
            "round played"
        );
        Ok(result)
    }

    pub fn stats(&self, id: &SessionId) -> Result<StatsSnapshot, DomainError> {
        self.with_session(id, |session| session.stats())
    }

    pub fn reset(&self, id: &SessionId) -> Result<(), DomainError> {
        self.with_session(id, Session::reset)?;
        info!(session_id = %id, "session reset");
        Ok(())
    }

    /// Change the opponent's difficulty; a bad token leaves the old level.
    pub fn set_difficulty(
        &self,
        id: &SessionId,
        difficulty_token: &str,
    ) -> Result<Difficulty, DomainError> {
        let difficulty: Difficulty = difficulty_token.parse()?;
        self.with_session(id, |session| session.set_difficulty(difficulty))?;
        info!(session_id = %id, %difficulty, "difficulty updated");
        Ok(difficulty)
    }

    pub fn delete_session(&self, id: &SessionId) -> Result<(), DomainError> {
        if self.store.delete(id) {
            info!(session_id = %id, "session deleted");
            Ok(())
        } else {
            Err(DomainError::session_not_found(id.as_str()))
        }
    }

    /// Evict sessions idle for longer than `ttl`.
    pub fn sweep_idle(&self, now: OffsetDateTime, ttl: Duration) -> usize {
        self.store.sweep(now, ttl)
    }

    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Run `op` while holding the session's lock.
    fn with_session<T>(
        &self,
        id: &SessionId,
        op: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, DomainError> {
        let handle = self
            .store
            .get(id)
            .ok_or_else(|| DomainError::session_not_found(id.as_str()))?;

        let mut session = handle.lock();
        // Swept or deleted between lookup and lock.
        if session.is_evicted() {
            return Err(DomainError::session_not_found(id.as_str()));
        }
        Ok(op(&mut *session))
    }
}
