use crate::core::app_state::AppState;
use crate::services::cascade;
use crate::utils::response;

use axum::{extract::State, response::Response};
use serde_json::json;

/// Full catalog reset: every association, song and artist is purged.
pub async fn delete_all_artists(State(app_state): State<AppState>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match cascade::delete_all_artists(&mut db_conn, &app_state.config) {
		Ok(()) => response::success(json!({})),
		Err(err) => response::from_service_error(err),
	}
}
