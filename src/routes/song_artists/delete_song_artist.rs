use crate::core::app_state::AppState;
use crate::services::song_artists;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn delete_song_artist(
	State(app_state): State<AppState>,
	Path((song_id, artist_id)): Path<(String, String)>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match song_artists::delete_pair(&mut db_conn, &song_id, &artist_id) {
		Ok(Some(association)) => response::success(json!({ "song_artist": association })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, "Song-artist association not found"),
		Err(err) => response::from_service_error(err),
	}
}
