use crate::core::app_state::AppState;
use crate::services::genres::{self, NewGenre};
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
	Json,
};
use serde_json::json;

pub async fn update_genre(
	State(app_state): State<AppState>,
	Path(id): Path<String>,
	Json(payload): Json<NewGenre>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match genres::update_genre(&mut db_conn, &id, payload) {
		Ok(Some(genre)) => response::success(json!({ "genre": genre })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Genre with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
