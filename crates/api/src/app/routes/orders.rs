use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use fabplan_core::OrderId;
use fabplan_orders::{NewOrder, OrderUpdate};

use crate::app::errors;
use crate::app::stores::Stores;

pub fn router() -> Router {
    // `/teams` must sit alongside `/:id`; the static segment wins.
    Router::new()
        .nest("/teams", super::teams::router())
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}

pub async fn list_orders(Extension(stores): Extension<Arc<Stores>>) -> axum::response::Response {
    let items = stores.orders.list();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_order(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.orders.get(id) {
        Some(order) => (StatusCode::OK, Json(order)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "order not found"),
    }
}

pub async fn create_order(
    Extension(stores): Extension<Arc<Stores>>,
    Json(body): Json<NewOrder>,
) -> axum::response::Response {
    match stores.orders.create(body) {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_order(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
    Json(body): Json<OrderUpdate>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.orders.update(id, body) {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_order(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.orders.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
