use actix_web::web;

pub mod game;
pub mod health;
pub mod sessions;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both serve the same paths; middleware is applied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/session").configure(sessions::configure_routes));
    cfg.service(web::scope("/api/game").configure(game::configure_routes));
}
