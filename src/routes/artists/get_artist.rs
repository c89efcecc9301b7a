use crate::core::app_state::AppState;
use crate::services::artists;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn get_artist(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match artists::get_artist(&mut db_conn, &id) {
		Ok(Some(artist)) => response::success(json!({ "artist": artist })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Artist with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
