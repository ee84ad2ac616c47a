//! Axum application setup.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.cors_origin.as_deref());

    let api_routes = Router::new().route(
        "/resume-generator/generate",
        post(handlers::generate_resume),
    );

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin.map(|o| (o, o.parse::<HeaderValue>())) {
        Some((_, Ok(value))) => layer.allow_origin(value),
        Some((raw, Err(_))) => {
            warn!("Ignoring invalid CORS origin {:?}; allowing any origin", raw);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}

/// Start the web server.
pub async fn run_server(
    state: AppState,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    info!("Listening on http://{}", addr);
    info!("Resume generator: POST http://{}/api/v1/resume-generator/generate", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
