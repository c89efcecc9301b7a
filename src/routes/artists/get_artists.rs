use crate::core::app_state::AppState;
use crate::services::artists::{self, ArtistFilter};
use crate::utils::response;

use axum::{
	extract::{Query, State},
	response::Response,
};
use serde_json::json;

pub async fn get_artists(State(app_state): State<AppState>, Query(filter): Query<ArtistFilter>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match artists::list_artists(&mut db_conn, &filter) {
		Ok((artists, metadata)) => response::success(json!({ "artists": artists, "metadata": metadata })),
		Err(err) => response::from_service_error(err),
	}
}
