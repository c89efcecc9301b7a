use crate::core::app_state::AppState;
use crate::utils::{jwt, response};

use axum::{
	extract::{Request, State},
	http::{header, StatusCode},
	middleware::Next,
	response::{IntoResponse, Response},
};

pub const ROLE_REGULAR: i32 = 0;
pub const ROLE_ADMIN: i32 = 1;

fn bearer_claims(req: &Request, secret_key: &str) -> Result<jwt::Claims, &'static str> {
	let header_value = req
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|value| value.to_str().ok())
		.ok_or("No authorization token provided")?;

	let token = header_value.strip_prefix("Bearer ").ok_or("Expected a bearer token")?;

	jwt::verify(token, secret_key)
		.map(|data| data.claims)
		.map_err(|_| "Invalid or expired token")
}

/// Every operation except signup and login passes through here.
pub async fn require_auth(State(app_state): State<AppState>, mut req: Request, next: Next) -> Response {
	match bearer_claims(&req, &app_state.config.jwt_secret) {
		Ok(claims) => {
			req.extensions_mut().insert(claims);
			next.run(req).await
		}
		Err(message) => response::fail(StatusCode::UNAUTHORIZED, message).into_response(),
	}
}

async fn require_role(app_state: AppState, mut req: Request, next: Next, allowed: &[i32]) -> Response {
	match bearer_claims(&req, &app_state.config.jwt_secret) {
		Ok(claims) if allowed.contains(&claims.role) => {
			req.extensions_mut().insert(claims);
			next.run(req).await
		}
		Ok(_) => response::fail(StatusCode::FORBIDDEN, "Access denied").into_response(),
		Err(message) => response::fail(StatusCode::UNAUTHORIZED, message).into_response(),
	}
}

pub async fn require_admin(State(app_state): State<AppState>, req: Request, next: Next) -> Response {
	require_role(app_state, req, next, &[ROLE_ADMIN]).await
}

pub async fn require_regular(State(app_state): State<AppState>, req: Request, next: Next) -> Response {
	require_role(app_state, req, next, &[ROLE_REGULAR]).await
}
