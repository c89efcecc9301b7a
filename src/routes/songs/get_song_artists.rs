use crate::core::app_state::AppState;
use crate::services::{song_artists, songs};
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn get_song_artists(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match songs::get_song(&mut db_conn, &id) {
		Ok(Some(_)) => (),
		Ok(None) => {
			return response::fail(StatusCode::NOT_FOUND, &format!("Song with id {id} not found"));
		}
		Err(err) => {
			return response::from_service_error(err);
		}
	}

	match song_artists::artists_by_song(&mut db_conn, &id) {
		Ok(artists) => response::success(json!({ "artists": artists })),
		Err(err) => response::from_service_error(err),
	}
}
