#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

// Re-exports for public API
pub use ai::{PatternPredictor, PatternTable};
pub use config::AppConfig;
pub use domain::{Difficulty, Move, Outcome, Session, SessionId};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::{SessionPath, ValidatedJson};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use services::SessionService;
pub use state::app_state::AppState;
pub use store::{InMemorySessionStore, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
