use crate::config::AppConfig;
use crate::services::SessionService;

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Session operations over the injected store
    pub sessions: SessionService,
    /// Process configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(sessions: SessionService, config: AppConfig) -> Self {
        Self { sessions, config }
    }
}
