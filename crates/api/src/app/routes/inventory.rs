use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use fabplan_core::ItemId;
use fabplan_inventory::{ItemUpdate, NewItem};

use crate::app::errors;
use crate::app::stores::Stores;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/low-stock", get(low_stock))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn list_items(Extension(stores): Extension<Arc<Stores>>) -> axum::response::Response {
    let items = stores.inventory.list();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn low_stock(Extension(stores): Extension<Arc<Stores>>) -> axum::response::Response {
    let items = stores.inventory.low_stock();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_item(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.inventory.get(id) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "item not found"),
    }
}

pub async fn create_item(
    Extension(stores): Extension<Arc<Stores>>,
    Json(body): Json<NewItem>,
) -> axum::response::Response {
    match stores.inventory.create(body) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
    Json(body): Json<ItemUpdate>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.inventory.update(id, body) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.inventory.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
