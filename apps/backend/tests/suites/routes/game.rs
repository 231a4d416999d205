use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use backend::infra::state::build_state;
use backend_test_support::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::common::read_success_json;
use crate::support::{create_test_app, seeded_state};

const MOVES: [&str; 3] = ["rock", "paper", "scissors"];

async fn create_session<S>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/session/create")
        .to_request();
    let json = read_success_json(test::call_service(app, req).await).await;
    json["sessionId"].as_str().expect("sessionId").to_string()
}

async fn post_json<S>(app: &S, uri: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

async fn play<S>(app: &S, session_id: &str, choice: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post_json(
        app,
        "/api/game/play",
        json!({ "sessionId": session_id, "playerChoice": choice }),
    )
    .await;
    read_success_json(resp).await["result"].clone()
}

#[actix_web::test]
async fn play_returns_round_result() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;

    let result = play(&app, &session_id, "rock").await;

    assert_eq!(result["playerChoice"], "rock");
    assert!(MOVES.contains(&result["aiChoice"].as_str().unwrap()));
    assert!(["win", "lose", "draw"].contains(&result["result"].as_str().unwrap()));
    assert_eq!(result["totalGames"], 1);
    assert_eq!(result["aiPatternCount"], 0);
    let scored = result["playerScore"].as_u64().unwrap() + result["aiScore"].as_u64().unwrap();
    assert!(scored <= 1);
}

#[actix_web::test]
async fn localized_tokens_are_accepted() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;

    assert_eq!(play(&app, &session_id, "Batu").await["playerChoice"], "rock");
    assert_eq!(play(&app, &session_id, "KERTAS").await["playerChoice"], "paper");
    assert_eq!(play(&app, &session_id, "gunting").await["playerChoice"], "scissors");
}

#[actix_web::test]
async fn repeated_move_builds_patterns() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;

    let mut last_total = 0;
    for round in 1..=4u64 {
        let result = play(&app, &session_id, "rock").await;
        assert_eq!(result["totalGames"], round);
        if round >= 2 {
            assert!(result["aiPatternCount"].as_u64().unwrap() >= 1);
        }
        last_total = result["totalGames"].as_u64().unwrap();
    }
    assert_eq!(last_total, 4);
}

#[actix_web::test]
async fn stats_balance_and_shape() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;
    for choice in ["rock", "paper", "scissors", "rock", "rock"] {
        play(&app, &session_id, choice).await;
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/stats/{session_id}"))
        .to_request();
    let stats = read_success_json(test::call_service(&app, req).await).await["stats"].clone();

    let total = stats["totalGames"].as_u64().unwrap();
    let player = stats["playerScore"].as_u64().unwrap();
    let ai = stats["aiScore"].as_u64().unwrap();
    let draws = stats["draws"].as_u64().unwrap();
    assert_eq!(total, 5);
    assert_eq!(player + ai + draws, total);
    assert!(stats["winRate"].is_number());
    assert_eq!(stats["difficulty"], "normal");
    assert!(stats["aiPatternCount"].as_u64().unwrap() >= 1);
}

#[actix_web::test]
async fn reset_clears_progress() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;
    for _ in 0..3 {
        play(&app, &session_id, "paper").await;
    }

    let resp = post_json(&app, "/api/game/reset", json!({ "sessionId": session_id })).await;
    let json = read_success_json(resp).await;
    assert_eq!(json["message"], "Game reset successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/stats/{session_id}"))
        .to_request();
    let stats = read_success_json(test::call_service(&app, req).await).await["stats"].clone();
    assert_eq!(stats["totalGames"], 0);
    assert_eq!(stats["playerScore"], 0);
    assert_eq!(stats["aiScore"], 0);
    assert_eq!(stats["draws"], 0);
    assert_eq!(stats["winRate"], 0.0);
    assert_eq!(stats["aiPatternCount"], 0);
}

#[actix_web::test]
async fn difficulty_change_and_rejection() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;

    let resp = post_json(
        &app,
        "/api/game/difficulty",
        json!({ "sessionId": session_id, "difficulty": "hard" }),
    )
    .await;
    read_success_json(resp).await;

    let resp = post_json(
        &app,
        "/api/game/difficulty",
        json!({ "sessionId": session_id, "difficulty": "impossible" }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_DIFFICULTY",
        StatusCode::BAD_REQUEST,
        Some("impossible"),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/session/{session_id}"))
        .to_request();
    let json = read_success_json(test::call_service(&app, req).await).await;
    assert_eq!(json["session"]["difficulty"], "hard");
}

#[actix_web::test]
async fn seeded_sessions_replay_identically() {
    let app = create_test_app(seeded_state(7))
        .with_prod_routes()
        .build()
        .await;
    let first = create_session(&app).await;
    let second = create_session(&app).await;
    let sequence = ["rock", "rock", "paper", "rock", "scissors", "rock", "rock"];

    let mut first_moves = Vec::new();
    let mut second_moves = Vec::new();
    for choice in sequence {
        first_moves.push(play(&app, &first, choice).await["aiChoice"].clone());
    }
    for choice in sequence {
        second_moves.push(play(&app, &second, choice).await["aiChoice"].clone());
    }

    assert_eq!(first_moves, second_moves);
}

#[actix_web::test]
async fn play_validation_order() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;
    let session_id = create_session(&app).await;

    let resp = post_json(&app, "/api/game/play", json!({ "sessionId": session_id })).await;
    assert_problem_details_from_service_response(
        resp,
        "MISSING_FIELD",
        StatusCode::BAD_REQUEST,
        Some("playerChoice"),
    )
    .await;

    let resp = post_json(
        &app,
        "/api/game/play",
        json!({ "sessionId": session_id, "playerChoice": "lizard" }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_MOVE",
        StatusCode::BAD_REQUEST,
        Some("lizard"),
    )
    .await;

    // A bad token is reported before the session lookup
    let resp = post_json(
        &app,
        "/api/game/play",
        json!({ "sessionId": "nope", "playerChoice": "lizard" }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_MOVE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let resp = post_json(
        &app,
        "/api/game/play",
        json!({ "sessionId": "nope", "playerChoice": "rock" }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("nope"),
    )
    .await;
}

#[actix_web::test]
async fn reset_without_session_id_is_missing_field() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let resp = post_json(&app, "/api/game/reset", json!({})).await;

    assert_problem_details_from_service_response(
        resp,
        "MISSING_FIELD",
        StatusCode::BAD_REQUEST,
        Some("sessionId"),
    )
    .await;
}
