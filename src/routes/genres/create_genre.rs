use crate::core::app_state::AppState;
use crate::services::genres::{self, NewGenre};
use crate::utils::response;

use axum::{extract::State, response::Response, Json};
use serde_json::json;

pub async fn create_genre(State(app_state): State<AppState>, Json(payload): Json<NewGenre>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match genres::create_genre(&mut db_conn, payload) {
		Ok(genre) => response::created(json!({ "genre": genre })),
		Err(err) => response::from_service_error(err),
	}
}
