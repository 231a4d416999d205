use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use super::{SessionHandle, SessionStore};
use crate::domain::{Session, SessionId};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, SessionHandle>,
    seed: Option<u64>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every session created by this store gets `seed` for its opponent RNG.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            sessions: DashMap::new(),
            seed,
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self) -> SessionHandle {
        loop {
            let id = SessionId::generate();
            if let Entry::Vacant(slot) = self.sessions.entry(id.clone()) {
                let handle = Arc::new(Mutex::new(Session::new(id, self.seed)));
                slot.insert(Arc::clone(&handle));
                return handle;
            }
            debug!(session_id = %id, "session id collision, regenerating");
        }
    }

    fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    fn delete(&self, id: &SessionId) -> bool {
        match self.sessions.remove(id) {
            Some((_, handle)) => {
                handle.lock().mark_evicted();
                true
            }
            None => false,
        }
    }

    fn sweep(&self, now: OffsetDateTime, ttl: Duration) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|id, handle| {
            // Waits for any in-flight operation on this session to finish.
            let mut session = handle.lock();
            if session.is_idle(now, ttl) {
                session.mark_evicted();
                evicted += 1;
                debug!(session_id = %id, "evicting idle session");
                false
            } else {
                true
            }
        });
        evicted
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
