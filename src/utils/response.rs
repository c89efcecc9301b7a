use crate::services::error::ServiceError;

use axum::http::{header, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

/// Uniform response envelope: success carries a data payload, fail a
/// client-caused message, error a server-caused message.
fn envelope(status: StatusCode, body: Value) -> Response<String> {
	Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "application/json")
		.body(body.to_string())
		.unwrap()
}

pub fn success(data: Value) -> Response<String> {
	envelope(StatusCode::OK, json!({ "status": "success", "data": data }))
}

pub fn created(data: Value) -> Response<String> {
	envelope(StatusCode::CREATED, json!({ "status": "success", "data": data }))
}

pub fn fail(status: StatusCode, message: &str) -> Response<String> {
	envelope(status, json!({ "status": "fail", "message": message }))
}

pub fn error(message: &str) -> Response<String> {
	envelope(
		StatusCode::INTERNAL_SERVER_ERROR,
		json!({ "status": "error", "message": message }),
	)
}

pub fn from_service_error(err: ServiceError) -> Response<String> {
	match &err {
		ServiceError::SongNotFound | ServiceError::ArtistNotFound | ServiceError::GenreNotFound => {
			fail(StatusCode::NOT_FOUND, &err.to_string())
		}
		ServiceError::IncorrectPassword => fail(StatusCode::BAD_REQUEST, &err.to_string()),
		ServiceError::Validation(message) => fail(StatusCode::BAD_REQUEST, message),
		ServiceError::Conflict(message) => fail(StatusCode::CONFLICT, message),
		ServiceError::Database(_) | ServiceError::Hash(_) => error(&err.to_string()),
	}
}
