use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use fabplan_core::TeamId;
use fabplan_orders::{NewTeam, TeamUpdate};

use crate::app::errors;
use crate::app::stores::Stores;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id", get(get_team).put(update_team).delete(delete_team))
}

pub async fn list_teams(Extension(stores): Extension<Arc<Stores>>) -> axum::response::Response {
    let items = stores.teams.list();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_team(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: TeamId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.teams.get(id) {
        Some(team) => (StatusCode::OK, Json(team)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "team not found"),
    }
}

pub async fn create_team(
    Extension(stores): Extension<Arc<Stores>>,
    Json(body): Json<NewTeam>,
) -> axum::response::Response {
    match stores.teams.create(body) {
        Ok(team) => (StatusCode::CREATED, Json(team)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_team(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
    Json(body): Json<TeamUpdate>,
) -> axum::response::Response {
    let id: TeamId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.teams.update(id, body) {
        Ok(team) => (StatusCode::OK, Json(team)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_team(
    Extension(stores): Extension<Arc<Stores>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: TeamId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match stores.teams.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
