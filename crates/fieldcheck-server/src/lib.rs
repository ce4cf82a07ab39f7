pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use fieldcheck_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config) -> Router {
    let app_state = state::AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health))
        // Actors
        .route("/api/actors/resolve", get(routes::actors::resolve_actor))
        // Schemas
        .route("/api/schemas", get(routes::schemas::list_schemas))
        .route("/api/schemas/{name}", get(routes::schemas::get_schema))
        .route(
            "/api/schemas/{name}/validate",
            post(routes::schemas::validate_payload),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the validation server on the host and port named in `config.server`.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener).await
}

/// Start the validation server on a pre-bound listener.
///
/// The caller can read the actual port before starting, which matters when
/// binding to port 0.
pub async fn serve_on(config: Config, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    let schemas = config.schemas.len();
    let app = build_router(config);

    tracing::info!(%local, schemas, "fieldcheck server listening on http://{local}");

    axum::serve(listener, app).await?;
    Ok(())
}
