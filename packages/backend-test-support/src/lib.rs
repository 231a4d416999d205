//! Backend test support utilities
//!
//! Shared helpers for the backend's unit and integration tests: one-time
//! logging initialization and Problem Details assertions for error responses.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details_from_parts, assert_problem_details_from_service_response};
