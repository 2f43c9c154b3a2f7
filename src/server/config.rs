use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes;

pub fn configure_app() -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health_check))
        // Static files (global stylesheet, fonts)
        .nest_service("/static", ServeDir::new("./static").precompressed_gzip())
        .layer(TraceLayer::new_for_http())
}
