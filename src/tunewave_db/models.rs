use crate::schema::*;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Insertable, Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct User {
	pub user_id: String,
	pub username: String,
	pub email: String,
	pub pwd_hash: String,
	pub full_name: Option<String>,
	pub signup_date: String,
	pub avatar: Option<String>,
	pub role: i32,
}

/// User as returned by the API. The password hash never leaves the service layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
	pub user_id: String,
	pub username: String,
	pub email: String,
	pub full_name: Option<String>,
	pub signup_date: String,
	pub avatar: Option<String>,
	pub role: i32,
}

impl From<User> for UserResponse {
	fn from(user: User) -> UserResponse {
		UserResponse {
			user_id: user.user_id,
			username: user.username,
			email: user.email,
			full_name: user.full_name,
			signup_date: user.signup_date,
			avatar: user.avatar,
			role: user.role,
		}
	}
}

#[derive(AsChangeset, Debug, Default, Deserialize)]
#[diesel(table_name = users)]
pub struct UserUpdate {
	pub username: Option<String>,
	pub email: Option<String>,
	pub full_name: Option<String>,
}

impl UserUpdate {
	pub fn is_empty(&self) -> bool {
		self.username.is_none() && self.email.is_none() && self.full_name.is_none()
	}
}

#[derive(Insertable, Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = artists)]
pub struct Artist {
	pub artist_id: String,
	pub artist_name: String,
	pub bio: Option<String>,
	pub country: Option<String>,
	pub avatar: Option<String>,
}

#[derive(AsChangeset, Debug, Default, Deserialize)]
#[diesel(table_name = artists)]
pub struct ArtistUpdate {
	pub artist_name: Option<String>,
	pub bio: Option<String>,
	pub country: Option<String>,
}

impl ArtistUpdate {
	pub fn is_empty(&self) -> bool {
		self.artist_name.is_none() && self.bio.is_none() && self.country.is_none()
	}
}

#[derive(Insertable, Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = genres)]
pub struct Genre {
	pub genre_id: String,
	pub genre_name: String,
}

#[derive(Insertable, Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = songs)]
pub struct Song {
	pub song_id: String,
	pub song_name: String,
	pub duration: i32,
	pub genre_id: Option<String>,
	pub release_date: Option<String>,
	pub streaming_count: i32,
	pub sound: String,
	pub avatar: Option<String>,
}

/// Song detail as returned by list/get endpoints, with the genre name and the
/// linked artist names resolved.
#[derive(Debug, Serialize, Deserialize)]
pub struct SongResponse {
	pub song_id: String,
	pub song_name: String,
	pub duration: i32,
	pub genre_id: Option<String>,
	pub genre_name: Option<String>,
	pub release_date: Option<String>,
	pub streaming_count: i32,
	pub sound: String,
	pub avatar: Option<String>,
	pub artist_name: Option<String>,
}

#[derive(AsChangeset, Debug, Default, Deserialize)]
#[diesel(table_name = songs)]
pub struct SongUpdate {
	pub song_name: Option<String>,
	pub duration: Option<i32>,
	pub genre_id: Option<String>,
	pub release_date: Option<String>,
}

impl SongUpdate {
	pub fn is_empty(&self) -> bool {
		self.song_name.is_none() && self.duration.is_none() && self.genre_id.is_none() && self.release_date.is_none()
	}
}

#[derive(Insertable, Queryable, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = song_artists)]
pub struct SongArtist {
	pub song_id: String,
	pub artist_id: String,
}
