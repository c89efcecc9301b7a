use crate::config::SOUND_STORAGE;
use crate::core::app_state::AppState;
use crate::services::assets;
use crate::services::songs::{self, NewSong};
use crate::utils::response;

use axum::{
	body::Bytes,
	extract::{Query, State},
	http::StatusCode,
	response::Response,
};
use serde::Deserialize;
use serde_json::json;
use std::fs;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateSongParams {
	pub song_name: String,
	pub duration: i32,
	pub genre_id: Option<String>,
	pub release_date: Option<String>,
	/// Comma separated artist ids.
	pub artist_ids: Option<String>,
}

/// Song metadata arrives in the query string; the request body is the raw
/// sound file.
pub async fn create_song(
	State(app_state): State<AppState>,
	Query(params): Query<CreateSongParams>,
	body: Bytes,
) -> Response<String> {
	if body.is_empty() {
		return response::fail(StatusCode::BAD_REQUEST, "Sound file is required");
	}

	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	let storage = app_state.config.asset_root.join(SOUND_STORAGE);
	if let Err(err) = fs::create_dir_all(&storage) {
		return response::error(&format!("Failed to create directory: {err}"));
	}

	let stored = format!("{SOUND_STORAGE}/{}.mp3", Uuid::new_v4());
	if let Err(err) = fs::write(app_state.config.asset_path(&stored), &body) {
		return response::error(&format!("Failed to save sound: {err}"));
	}

	let artist_ids: Vec<String> = params
		.artist_ids
		.as_deref()
		.unwrap_or("")
		.split(',')
		.map(str::trim)
		.filter(|id| !id.is_empty())
		.map(str::to_string)
		.collect();

	let payload = NewSong {
		song_name: params.song_name,
		duration: params.duration,
		genre_id: params.genre_id,
		release_date: params.release_date,
		sound: stored.clone(),
		avatar: None,
		artist_ids,
	};

	match songs::create_song(&mut db_conn, payload) {
		Ok(song) => response::created(json!({ "song": song })),
		Err(err) => {
			assets::remove_asset(&app_state.config.asset_root, &stored, &[]);
			response::from_service_error(err)
		}
	}
}
