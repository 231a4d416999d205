use actix_web::{web, App, HttpServer};
use backend::config::AppConfig;
use backend::infra::state::build_state;
use backend::infra::sweeper::spawn_session_sweeper;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;

    let app_state = build_state().with_config(config).build();

    let sweeper = spawn_session_sweeper(
        app_state.sessions.clone(),
        app_state.config.sweep_interval,
        app_state.config.session_ttl,
    );

    info!(
        %host,
        port,
        ttl_secs = app_state.config.session_ttl.whole_seconds(),
        seeded = app_state.config.opponent_seed.is_some(),
        "starting rps backend"
    );

    let data = web::Data::new(app_state);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await;

    sweeper.abort();
    result
}
