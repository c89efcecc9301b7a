use crate::core::app_state::AppState;
use crate::services::songs;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn get_song(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	let song = match songs::get_song(&mut db_conn, &id) {
		Ok(Some(song)) => song,
		Ok(None) => {
			return response::fail(StatusCode::NOT_FOUND, &format!("Song with id {id} not found"));
		}
		Err(err) => {
			return response::from_service_error(err);
		}
	};

	match songs::to_response(&mut db_conn, song) {
		Ok(song) => response::success(json!({ "song": song })),
		Err(err) => response::from_service_error(err.into()),
	}
}
