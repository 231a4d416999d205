#![allow(dead_code)]

pub mod proptest_prelude;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a 2xx response body as JSON and check the `success` envelope.
pub async fn read_success_json(resp: ServiceResponse<BoxBody>) -> Value {
    let json = read_json(resp).await;
    assert_eq!(json["success"], true, "success flag missing in {json}");
    json
}

/// Read a 2xx response body as JSON without envelope checks.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let status = resp.status();
    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");
    assert!(status.is_success(), "expected 2xx, got {status}: {body_str}");

    serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("Response body is not JSON: {body_str}"))
}
