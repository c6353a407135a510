use crate::AppState;
use axum::{middleware, Extension, Router};
use tower_http::cors::CorsLayer;

pub mod repositories;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/repositories", repositories::router())
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(crate::middleware::log_request_timing))
}
