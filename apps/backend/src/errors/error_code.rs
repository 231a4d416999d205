//! Error codes for the game backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the game backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Unrecognized move token
    InvalidMove,
    /// Unrecognized difficulty token
    InvalidDifficulty,
    /// Required request field missing
    MissingField,
    /// Malformed request (e.g. unparsable JSON body)
    BadRequest,

    // Resource Not Found
    /// Session not found (unknown, deleted or expired)
    SessionNotFound,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidMove => "INVALID_MOVE",
            Self::InvalidDifficulty => "INVALID_DIFFICULTY",
            Self::MissingField => "MISSING_FIELD",
            Self::BadRequest => "BAD_REQUEST",

            Self::SessionNotFound => "SESSION_NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
