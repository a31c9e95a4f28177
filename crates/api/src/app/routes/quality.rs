use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use fabplan_core::ReportId;
use fabplan_quality::NewReport;

use crate::app::errors;
use crate::app::stores::Stores;

pub fn router() -> Router {
    Router::new()
        .route("/reports", get(list_reports).post(create_report))
        .route("/reports/:id", get(get_report).delete(delete_report))
        .route("/metrics", get(metrics))
}

pub async fn list_reports(Extension(stores): Extension<Arc<Stores>>) -> axum::response::Response {
    let items = stores.quality.list();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_report(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ReportId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.quality.get(id) {
        Some(report) => (StatusCode::OK, Json(report)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "report not found"),
    }
}

pub async fn create_report(
    Extension(stores): Extension<Arc<Stores>>,
    Json(body): Json<NewReport>,
) -> axum::response::Response {
    match stores.quality.create(body) {
        Ok(report) => (StatusCode::CREATED, Json(report)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_report(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ReportId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.quality.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn metrics(Extension(stores): Extension<Arc<Stores>>) -> axum::response::Response {
    (StatusCode::OK, Json(stores.quality.summary())).into_response()
}
