use crate::core::app_state::AppState;
use crate::services::{artists, song_artists};
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn get_artist_songs(State(app_state): State<AppState>, Path(artist_id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match artists::get_artist(&mut db_conn, &artist_id) {
		Ok(Some(_)) => (),
		Ok(None) => {
			return response::fail(StatusCode::NOT_FOUND, &format!("Artist with id {artist_id} not found"));
		}
		Err(err) => {
			return response::from_service_error(err);
		}
	}

	match song_artists::songs_by_artist(&mut db_conn, &artist_id) {
		Ok(songs) => response::success(json!({ "songs": songs })),
		Err(err) => response::from_service_error(err),
	}
}
