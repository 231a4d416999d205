//! Session storage.
//!
//! The engine never reaches for a global registry; services receive a
//! [`SessionStore`] at construction time. Each session sits behind its own
//! lock so operations on different sessions never contend, while adding and
//! removing entries is synchronized by the store itself.

use std::sync::Arc;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

use crate::domain::{Session, SessionId};

mod memory;

pub use memory::InMemorySessionStore;

/// Shared, lockable handle to one session.
pub type SessionHandle = Arc<Mutex<Session>>;

pub trait SessionStore: Send + Sync {
    /// Create and register a fresh session under a new unique id.
    fn create(&self) -> SessionHandle;

    /// Handle to an existing session. Callers lock it per operation.
    fn get(&self, id: &SessionId) -> Option<SessionHandle>;

    /// Remove a session; returns whether it existed.
    fn delete(&self, id: &SessionId) -> bool;

    /// Evict every session idle for longer than `ttl` as of `now`.
    /// Returns the number of sessions removed.
    fn sweep(&self, now: OffsetDateTime, ttl: Duration) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
