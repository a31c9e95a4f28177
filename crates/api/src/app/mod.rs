//! HTTP application wiring (axum router + store wiring).
//!
//! Layout:
//! - `stores.rs`: seeded in-memory stores shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent `{ "error": ... }` responses

use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::{Extension, Router, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ALLOWED_ORIGINS;

pub mod errors;
pub mod routes;
pub mod stores;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let stores = Arc::new(stores::build_stores());

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.into_iter().map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(stores))
        .layer(cors)
}
