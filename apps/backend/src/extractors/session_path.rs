use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::SessionId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Session id taken from the `{session_id}` route segment.
///
/// Existence is not checked here; unknown ids fail later with
/// `SESSION_NOT_FOUND` from the service.
#[derive(Debug, Clone)]
pub struct SessionPath(pub SessionId);

impl FromRequest for SessionPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("session_id").map(str::trim) {
            Some(raw) if !raw.is_empty() => Ok(SessionPath(SessionId::from(raw))),
            _ => Err(AppError::bad_request(
                ErrorCode::MissingField,
                "Missing session_id parameter",
            )),
        };
        ready(result)
    }
}
