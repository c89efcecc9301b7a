use crate::core::app_state::AppState;
use crate::services::song_artists;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	response::Response,
};
use serde_json::json;

pub async fn delete_song_artists_by_artist(
	State(app_state): State<AppState>,
	Path(artist_id): Path<String>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match song_artists::delete_by_artist(&mut db_conn, &artist_id) {
		Ok(removed) => response::success(json!({ "removed": removed })),
		Err(err) => response::from_service_error(err),
	}
}
