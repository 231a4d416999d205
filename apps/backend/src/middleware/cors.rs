use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins allowed when CORS_ALLOWED_ORIGINS is unset or has no valid entry.
const DEFAULT_ORIGINS: [&str; 4] = [
    "http://localhost:5000",
    "http://127.0.0.1:5000",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// CORS for the game client:
/// - Origins come from CORS_ALLOWED_ORIGINS (comma separated)
/// - Only the methods the API routes use
pub fn cors_middleware() -> Cors {
    let configured = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

    let origins: Vec<String> = if configured.is_empty() {
        DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        configured
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

/// String-level validation only; empty and "null" entries are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
