use crate::core::app_state::AppState;
use crate::services::genres;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn delete_genre(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match genres::delete_genre(&mut db_conn, &id) {
		Ok(Some(genre)) => response::success(json!({ "genre": genre })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Genre with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
