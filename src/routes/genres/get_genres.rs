use crate::core::app_state::AppState;
use crate::services::genres::{self, GenreFilter};
use crate::utils::response;

use axum::{
	extract::{Query, State},
	response::Response,
};
use serde_json::json;

pub async fn get_genres(State(app_state): State<AppState>, Query(filter): Query<GenreFilter>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match genres::list_genres(&mut db_conn, &filter) {
		Ok((genres, metadata)) => response::success(json!({ "genres": genres, "metadata": metadata })),
		Err(err) => response::from_service_error(err),
	}
}
