use crate::core::app_state::AppState;
use crate::services::cascade;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

/// Removes the artist's junction rows, any song left without an artist, the
/// artist row, and the owned asset files.
pub async fn delete_artist(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match cascade::delete_artist(&mut db_conn, &app_state.config, &id) {
		Ok(Some(artist)) => response::success(json!({ "artist": artist })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Artist with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
