use thiserror::Error;

/// Domain errors surfaced by the service layer. Missing rows are normally
/// reported as `Ok(None)`; the variants here cover the cases the API has to
/// distinguish beyond a plain not-found.
#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("Song not found")]
	SongNotFound,

	#[error("Artist not found")]
	ArtistNotFound,

	#[error("Genre not found")]
	GenreNotFound,

	#[error("Old password is incorrect")]
	IncorrectPassword,

	#[error("{0}")]
	Validation(String),

	#[error("{0}")]
	Conflict(String),

	#[error("Database error: {0}")]
	Database(#[from] diesel::result::Error),

	#[error("Password hashing failed: {0}")]
	Hash(#[from] pwhash::error::Error),
}

impl ServiceError {
	pub fn validation(message: impl Into<String>) -> ServiceError {
		ServiceError::Validation(message.into())
	}

	pub fn conflict(message: impl Into<String>) -> ServiceError {
		ServiceError::Conflict(message.into())
	}
}
