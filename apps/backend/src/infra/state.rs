use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::SessionService;
use crate::state::app_state::AppState;
use crate::store::{InMemorySessionStore, SessionStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: AppConfig,
    store: Option<Arc<dyn SessionStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Substitute the session store; defaults to an in-memory store seeded
    /// from `config.opponent_seed`.
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> AppState {
        let store = self.store.unwrap_or_else(|| {
            Arc::new(InMemorySessionStore::with_seed(self.config.opponent_seed))
        });
        AppState::new(SessionService::new(store), self.config)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
