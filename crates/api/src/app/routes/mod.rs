use axum::Router;

pub mod inventory;
pub mod orders;
pub mod quality;
pub mod system;
pub mod teams;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/inventory", inventory::router())
        .nest("/quality", quality::router())
}
