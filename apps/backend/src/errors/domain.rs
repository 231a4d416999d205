//! Domain-level error type used across the engine, store and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Validation failures at the boundary of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Move token is not one of the three recognized moves
    InvalidMove,
    /// Difficulty token is not one of the three recognized levels
    InvalidDifficulty,
    /// A required request field was absent
    MissingField,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation failure; state is left untouched
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn missing_field(field: &str) -> Self {
        Self::validation(
            ValidationKind::MissingField,
            format!("Missing required field: {field}"),
        )
    }

    pub fn invalid_move(token: &str) -> Self {
        Self::validation(ValidationKind::InvalidMove, format!("Invalid choice: {token}"))
    }

    pub fn invalid_difficulty(token: &str) -> Self {
        Self::validation(
            ValidationKind::InvalidDifficulty,
            format!("Invalid difficulty: {token}"),
        )
    }

    pub fn session_not_found(session_id: &str) -> Self {
        Self::not_found(
            NotFoundKind::Session,
            format!("Session {session_id} not found"),
        )
    }
}
