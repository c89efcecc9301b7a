use crate::core::app_state::AppState;
use crate::services::users;
use crate::tunewave_db::models::UserResponse;
use crate::utils::response;

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Response,
	Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangePasswordPayload {
	pub old_password: String,
	pub new_password: String,
}

pub async fn change_password(
	State(app_state): State<AppState>,
	Path(id): Path<String>,
	Json(payload): Json<ChangePasswordPayload>,
) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	match users::update_password(&mut db_conn, &id, &payload.old_password, &payload.new_password) {
		Ok(Some(user)) => {
			// The plaintext is never echoed back; the record shows a placeholder.
			let mut user = serde_json::to_value(UserResponse::from(user)).unwrap();
			user["password"] = json!("*****");
			response::success(json!({ "user": user }))
		}
		Ok(None) => response::fail(StatusCode::NOT_FOUND, &format!("User with id {id} not found")),
		Err(err) => response::from_service_error(err),
	}
}
