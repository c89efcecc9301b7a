use crate::core::app_state::AppState;
use crate::services::songs;
use crate::tunewave_db::models::SongUpdate;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
	Json,
};
use serde_json::json;

pub async fn update_song(
	State(app_state): State<AppState>,
	Path(id): Path<String>,
	Json(changes): Json<SongUpdate>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match songs::update_song(&mut db_conn, &id, changes) {
		Ok(Some(song)) => response::success(json!({ "song": song })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Song with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
