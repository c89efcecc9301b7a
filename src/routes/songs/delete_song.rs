use crate::core::app_state::AppState;
use crate::services::cascade;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

/// Removes the song, its artist associations, and its asset files.
pub async fn delete_song(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match cascade::delete_song(&mut db_conn, &app_state.config, &id) {
		Ok(Some(song)) => response::success(json!({ "song": song })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Song with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
