use crate::core::app_state::AppState;
use crate::services::users::{self, UserFilter};
use crate::tunewave_db::models::UserResponse;
use crate::utils::response;

use axum::{
	extract::{Query, State},
	response::Response,
};
use serde_json::json;

pub async fn get_users(State(app_state): State<AppState>, Query(filter): Query<UserFilter>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match users::list_users(&mut db_conn, &filter) {
		Ok((records, metadata)) => {
			let users: Vec<UserResponse> = records.into_iter().map(UserResponse::from).collect();
			response::success(json!({ "users": users, "metadata": metadata }))
		}
		Err(err) => response::from_service_error(err),
	}
}
