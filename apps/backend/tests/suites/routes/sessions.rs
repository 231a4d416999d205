use actix_web::http::StatusCode;
use actix_web::test;
use backend::infra::state::build_state;
use backend_test_support::assert_problem_details_from_service_response;

use crate::common::read_success_json;
use crate::support::create_test_app;

#[actix_web::test]
async fn create_then_fetch_session() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/session/create")
        .to_request();
    let created = read_success_json(test::call_service(&app, req).await).await;

    let session_id = created["sessionId"].as_str().expect("sessionId").to_string();
    assert_eq!(session_id.len(), 12);
    assert!(session_id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(created["message"], "Session created successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/session/{session_id}"))
        .to_request();
    let fetched = read_success_json(test::call_service(&app, req).await).await;

    let session = &fetched["session"];
    assert_eq!(session["sessionId"], session_id.as_str());
    assert_eq!(session["playerScore"], 0);
    assert_eq!(session["aiScore"], 0);
    assert_eq!(session["totalGames"], 0);
    assert_eq!(session["difficulty"], "normal");
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/session/000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("000000000000"),
    )
    .await;
}

#[actix_web::test]
async fn delete_removes_session() {
    let state = build_state().build();
    let session_id = state.sessions.create_session();
    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/session/{session_id}"))
        .to_request();
    read_success_json(test::call_service(&app, req).await).await;
    assert_eq!(state.sessions.session_count(), 0);

    // Second delete and later reads both miss
    let req = test::TestRequest::delete()
        .uri(&format!("/api/session/{session_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/stats/{session_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
