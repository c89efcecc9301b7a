use crate::core::app_state::AppState;
use crate::services::songs;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
	Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct StreamingCountPayload {
	pub streaming_count: i32,
}

pub async fn update_streaming_count(
	State(app_state): State<AppState>,
	Path(id): Path<String>,
	Json(payload): Json<StreamingCountPayload>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match songs::update_streaming_count(&mut db_conn, &id, payload.streaming_count) {
		Ok(Some(song)) => response::success(json!({ "song": song })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("Song with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
