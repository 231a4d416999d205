//! Application services: the request/response contract over the core.

pub mod sessions;

pub use sessions::SessionService;
