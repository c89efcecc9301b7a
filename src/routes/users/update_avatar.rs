use crate::config::{DEFAULT_AVATAR, IMAGE_STORAGE};
use crate::core::app_state::AppState;
use crate::services::{assets, users};
use crate::tunewave_db::models::UserResponse;
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

pub async fn update_user_avatar(
	State(app_state): State<AppState>,
	Path(id): Path<String>,
	body: Bytes,
) -> Response<String> {
	if body.is_empty() {
		return response::fail(StatusCode::BAD_REQUEST, "Avatar file is required");
	}

	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	let storage = app_state.config.asset_root.join(IMAGE_STORAGE);
	if let Err(err) = fs::create_dir_all(&storage) {
		return response::error(&format!("Failed to create directory: {err}"));
	}

	let stored = format!("{IMAGE_STORAGE}/{}.png", Uuid::new_v4());
	if let Err(err) = fs::write(app_state.config.asset_path(&stored), &body) {
		return response::error(&format!("Failed to save image: {err}"));
	}

	match users::update_avatar(&mut db_conn, &app_state.config, &id, &stored) {
		Ok(Some(user)) => response::success(json!({ "user": UserResponse::from(user) })),
		Ok(None) => {
			// No owning row; drop the file we just wrote.
			assets::remove_asset(&app_state.config.asset_root, &stored, &[DEFAULT_AVATAR]);
			response::fail(StatusCode::NOT_FOUND, &format!("User with id {id} not found"))
		}
		Err(err) => response::from_service_error(err),
	}
}
