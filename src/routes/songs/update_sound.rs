use crate::config::SOUND_STORAGE;
use crate::core::app_state::AppState;
use crate::services::{assets, songs};
use crate::utils::response;

use axum::{
	body::Bytes,
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;
use std::fs;
use uuid::Uuid;

pub async fn update_song_sound(
	State(app_state): State<AppState>,
	Path(id): Path<String>,
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

	match songs::update_sound(&mut db_conn, &app_state.config, &id, &stored) {
		Ok(Some(song)) => response::success(json!({ "song": song })),
		Ok(None) => {
			assets::remove_asset(&app_state.config.asset_root, &stored, &[]);
			response::fail(StatusCode::NOT_FOUND, &format!("Song with id {id} not found"))
		}
		Err(err) => response::from_service_error(err),
	}
}
