//! Gameplay routes under `/api/game`.
//!
//! Request bodies keep every field optional so an absent field is reported
//! as `MISSING_FIELD` before token or session checks run.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::SessionId;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::{SessionPath, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    pub session_id: Option<String>,
    pub player_choice: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyRequest {
    pub session_id: Option<String>,
    pub difficulty: Option<String>,
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, DomainError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::missing_field(field))
}

/// POST /api/game/play
async fn play(
    body: ValidatedJson<PlayRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = required(&body.session_id, "sessionId")?;
    let choice = required(&body.player_choice, "playerChoice")?;

    let result = app_state
        .sessions
        .play_round(&SessionId::from(session_id), choice)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "result": result,
    })))
}

/// GET /api/game/stats/{session_id}
async fn stats(
    session: SessionPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stats = app_state.sessions.stats(&session.0)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "stats": stats,
    })))
}

/// POST /api/game/reset
async fn reset(
    body: ValidatedJson<SessionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = required(&body.session_id, "sessionId")?;

    app_state.sessions.reset(&SessionId::from(session_id))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Game reset successfully",
    })))
}

/// POST /api/game/difficulty
async fn set_difficulty(
    body: ValidatedJson<DifficultyRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session_id = required(&body.session_id, "sessionId")?;
    let token = required(&body.difficulty, "difficulty")?;

    let difficulty = app_state
        .sessions
        .set_difficulty(&SessionId::from(session_id), token)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("Difficulty updated to {difficulty}"),
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/play", web::post().to(play))
        .route("/stats/{session_id}", web::get().to(stats))
        .route("/reset", web::post().to(reset))
        .route("/difficulty", web::post().to(set_difficulty));
}
