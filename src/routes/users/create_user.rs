use crate::core::app_state::AppState;
use crate::services::users::{self, NewUser};
use crate::tunewave_db::models::UserResponse;
use crate::utils::response;

use axum::{extract::State, response::Response, Json};
use serde_json::json;

pub async fn create_user(State(app_state): State<AppState>, Json(payload): Json<NewUser>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match users::create_user(&mut db_conn, payload) {
		Ok(user) => response::created(json!({ "user": UserResponse::from(user) })),
		Err(err) => response::from_service_error(err),
	}
}
