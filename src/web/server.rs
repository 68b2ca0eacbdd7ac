//! HTTP server wiring using axum

use axum::http::{HeaderName, Method};
use axum::{
    Router,
    routing::{get, post},
};
use color_eyre::eyre::Result;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::SharedState;

use super::api;

/// Builds the full route table with its layers.
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([HeaderName::from_static("content-type")]);

    let tool_routes = Router::new()
        .route("/phishing/detect", post(api::detect_phishing))
        .route("/vulnerability/scan", post(api::scan_vulnerability))
        .route("/password/check", post(api::check_password));

    let content_routes = Router::new()
        .route("/articles", get(api::list_articles))
        .route("/articles/{id}", get(api::get_article))
        .route("/articles/{id}/like", post(api::like_article))
        .route("/articles/{id}/comment", post(api::add_comment))
        .route("/quiz", get(api::get_quiz))
        .route("/resource", get(api::get_resource))
        .route("/search", get(api::search))
        .with_state(state);

    Router::new()
        .nest("/api", tool_routes.merge(content_routes))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr, state: SharedState) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "ShieldHub listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
