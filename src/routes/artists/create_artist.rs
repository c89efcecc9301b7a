use crate::core::app_state::AppState;
use crate::services::artists::{self, NewArtist};
use crate::utils::response;

use axum::{extract::State, response::Response, Json};
use serde_json::json;

pub async fn create_artist(State(app_state): State<AppState>, Json(payload): Json<NewArtist>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match artists::create_artist(&mut db_conn, payload) {
		Ok(artist) => response::created(json!({ "artist": artist })),
		Err(err) => response::from_service_error(err),
	}
}
