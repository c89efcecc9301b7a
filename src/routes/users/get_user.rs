use crate::core::app_state::AppState;
use crate::services::users;
use crate::tunewave_db::models::UserResponse;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
};
use serde_json::json;

pub async fn get_user(State(app_state): State<AppState>, Path(id): Path<String>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match users::get_user(&mut db_conn, &id) {
		Ok(Some(user)) => response::success(json!({ "user": UserResponse::from(user) })),
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("User with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
