//! Problem Details test helpers
//!
//! Assertions for RFC 7807 error responses that do not depend on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local mirror of the backend's Problem Details body.
#[derive(Debug, Deserialize, Serialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract
///
/// Checks:
/// - HTTP status matches expected
/// - x-trace-id header exists and matches body trace_id
/// - Problem Details fields match expected values
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("Response body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(&body_str)
        .expect("Response body should be valid ProblemDetails JSON");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(
        problem.type_.ends_with(expected_code),
        "type URI should end with the error code (got {})",
        problem.type_
    );

    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "Expected detail to contain '{}', but got '{}'",
            expected_detail,
            problem.detail
        );
    }
}

/// Assert that a ServiceResponse conforms to the stable error contract
pub async fn assert_problem_details_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}
