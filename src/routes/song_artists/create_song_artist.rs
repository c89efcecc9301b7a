use crate::core::app_state::AppState;
use crate::services::cascade;
use crate::utils::response;

use axum::{extract::State, response::Response, Json};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateSongArtistPayload {
	pub song_id: String,
	pub artist_id: String,
}

pub async fn create_song_artist(
	State(app_state): State<AppState>,
	Json(payload): Json<CreateSongArtistPayload>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match cascade::create_song_artist(&mut db_conn, &payload.song_id, &payload.artist_id) {
		Ok(association) => response::created(json!({ "song_artist": association })),
		Err(err) => response::from_service_error(err),
	}
}
