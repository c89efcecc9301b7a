use crate::core::app_state::AppState;
use crate::services::songs::{self, SongFilter};
use crate::utils::response;

use axum::{
	extract::{Query, State},
	response::Response,
};
use serde_json::json;

pub async fn get_songs(State(app_state): State<AppState>, Query(filter): Query<SongFilter>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match songs::list_songs(&mut db_conn, &filter) {
		Ok((songs, metadata)) => response::success(json!({ "songs": songs, "metadata": metadata })),
		Err(err) => response::from_service_error(err),
	}
}
