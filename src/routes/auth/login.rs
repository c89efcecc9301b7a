use crate::core::app_state::AppState;
use crate::services::users;
use crate::tunewave_db::models::UserResponse;
use crate::utils::{exp, jwt, response};

use axum::{extract::State, http::StatusCode, response::Response, Json};
use pwhash::bcrypt;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginPayload {
	pub email: String,
	pub password: String,
}

pub async fn login(State(app_state): State<AppState>, Json(payload): Json<LoginPayload>) -> Response<String> {
	let mut db_conn = match app_state.db_pool.get() {
		Ok(conn) => conn,
		Err(err) => {
			return response::error(&format!("Failed to get DB from pool: {err}"));
		}
	};

	// Looking up the account by email
	let user = match users::find_by_email(&mut db_conn, &payload.email) {
		Ok(Some(user)) => user,
		Ok(None) => {
			return response::fail(
				StatusCode::NOT_FOUND,
				&format!("Account with email {} doesn't exist", payload.email),
			);
		}
		Err(err) => return response::from_service_error(err),
	};

	// Checking the password
	if !bcrypt::verify(&payload.password, &user.pwd_hash) {
		return response::fail(StatusCode::UNAUTHORIZED, "Invalid credentials");
	}

	// Token carries the user id and role for the authorization gate
	let claims = jwt::Claims {
		id: user.user_id.clone(),
		role: user.role,
		exp: exp::expiration_from_min(60),
	};
	let token = match jwt::generate(claims, &app_state.config.jwt_secret) {
		Ok(token) => token,
		Err(err) => return response::error(&err.to_string()),
	};

	response::success(json!({ "user": UserResponse::from(user), "token": token }))
}
