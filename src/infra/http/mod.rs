//! HTTP surface for the gateway.

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::HttpSettings;

pub fn build_router(state: AppState, settings: &HttpSettings) -> Router {
    Router::new()
        .route("/", get(handlers::server_info))
        .route("/health", get(handlers::health))
        .route("/api/blog/posts", get(handlers::list_posts))
        .route("/api/blog/posts/metadata", get(handlers::metadata_posts))
        .route(
            "/api/blog/posts/category/{category}",
            get(handlers::posts_by_category),
        )
        .route("/api/blog/posts/{id}", get(handlers::post_by_id))
        .route("/api/blog/categories", get(handlers::categories))
        .route("/api/blog/cache/stats", get(handlers::cache_stats))
        .route("/api/blog/cache/clear", post(handlers::cache_clear))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(settings))
        .with_state(state)
}

fn build_cors_layer(settings: &HttpSettings) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if settings.allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(target: "quill::http", %origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}
