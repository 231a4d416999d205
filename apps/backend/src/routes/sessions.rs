//! Session lifecycle routes under `/api/session`.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::extractors::SessionPath;
use crate::state::app_state::AppState;

/// POST /api/session/create
async fn create_session(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session_id = app_state.sessions.create_session();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "sessionId": session_id,
        "message": "Session created successfully",
    })))
}

/// GET /api/session/{session_id}
async fn get_session(
    session: SessionPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let summary = app_state.sessions.summary(&session.0)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "session": summary,
    })))
}

/// DELETE /api/session/{session_id}
async fn delete_session(
    session: SessionPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.sessions.delete_session(&session.0)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Session deleted",
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/create", web::post().to(create_session));
    cfg.service(
        web::resource("/{session_id}")
            .route(web::get().to(get_session))
            .route(web::delete().to(delete_session)),
    );
}
