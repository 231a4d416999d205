use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// JSON body extractor whose failures render as Problem Details (400
/// `BAD_REQUEST`) instead of actix's plain-text JSON errors.
///
/// Request DTOs keep their fields optional so that absent fields reach the
/// handler and surface as `MISSING_FIELD` rather than a parse failure.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let path = req.path().to_string();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(path = %path, error = %e, "failed to read request body");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            if body.iter().all(u8::is_ascii_whitespace) {
                return Err(AppError::bad_request(
                    ErrorCode::BadRequest,
                    "Request body must be a JSON object",
                ));
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(path = %path, body_size = body.len(), error = %e, "JSON parsing failed");
                AppError::bad_request(ErrorCode::BadRequest, describe_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Client-facing summary of a parse failure; serde's own message may echo
/// body content, so it only goes to the debug log.
fn describe_json_error(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => "Invalid JSON: wrong types for one or more fields".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
