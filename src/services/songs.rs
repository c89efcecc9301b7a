use crate::config::Config;
use crate::schema::{artists, genres, song_artists, songs};
use crate::services::assets;
use crate::services::cascade;
use crate::services::error::ServiceError;
use crate::services::pagination::{Metadata, Paginator};
use crate::tunewave_db::models::{Song, SongResponse, SongUpdate};

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::Deserialize;
use uuid::Uuid;

/// Song creation input, already resolved from the HTTP layer: the sound asset
/// has been stored and its path is known.
#[derive(Debug)]
pub struct NewSong {
	pub song_name: String,
	pub duration: i32,
	pub genre_id: Option<String>,
	pub release_date: Option<String>,
	pub sound: String,
	pub avatar: Option<String>,
	pub artist_ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SongFilter {
	pub song_name: Option<String>,
	pub genre_id: Option<String>,
	pub page: Option<i64>,
	pub limit: Option<i64>,
}

fn filtered(filter: &SongFilter) -> songs::BoxedQuery<'static, Sqlite> {
	let mut query = songs::table.into_boxed();
	if let Some(name) = &filter.song_name {
		query = query.filter(songs::song_name.like(format!("%{name}%")));
	}
	if let Some(genre_id) = &filter.genre_id {
		query = query.filter(songs::genre_id.eq(genre_id.clone()));
	}
	query
}

pub fn to_response(conn: &mut SqliteConnection, song: Song) -> QueryResult<SongResponse> {
	let genre_name = match &song.genre_id {
		Some(genre_id) => genres::table
			.filter(genres::genre_id.eq(genre_id))
			.select(genres::genre_name)
			.first::<String>(conn)
			.optional()?,
		None => None,
	};

	let names: Vec<String> = song_artists::table
		.inner_join(artists::table)
		.filter(song_artists::song_id.eq(&song.song_id))
		.select(artists::artist_name)
		.order(artists::artist_name.asc())
		.load(conn)?;
	let artist_name = if names.is_empty() { None } else { Some(names.join(", ")) };

	Ok(SongResponse {
		song_id: song.song_id,
		song_name: song.song_name,
		duration: song.duration,
		genre_id: song.genre_id,
		genre_name,
		release_date: song.release_date,
		streaming_count: song.streaming_count,
		sound: song.sound,
		avatar: song.avatar,
		artist_name,
	})
}

/// Creates the song and its artist associations in one transaction; a missing
/// genre or artist rolls the whole creation back.
pub fn create_song(conn: &mut SqliteConnection, payload: NewSong) -> Result<Song, ServiceError> {
	if payload.song_name.trim().is_empty() {
		return Err(ServiceError::validation("Song name should be a non-empty string"));
	}
	if payload.duration <= 0 {
		return Err(ServiceError::validation("Duration should be a positive number"));
	}
	if payload.sound.is_empty() {
		return Err(ServiceError::validation("Sound file is required"));
	}

	conn.transaction(|conn| {
		if let Some(genre_id) = &payload.genre_id {
			let found: i64 = genres::table
				.filter(genres::genre_id.eq(genre_id))
				.count()
				.get_result(conn)?;
			if found == 0 {
				return Err(ServiceError::GenreNotFound);
			}
		}

		let song = Song {
			song_id: Uuid::new_v4().to_string(),
			song_name: payload.song_name,
			duration: payload.duration,
			genre_id: payload.genre_id,
			release_date: payload.release_date,
			streaming_count: 0,
			sound: payload.sound,
			avatar: payload.avatar,
		};
		diesel::insert_into(songs::table).values(&song).execute(conn)?;

		for artist_id in &payload.artist_ids {
			cascade::create_song_artist(conn, &song.song_id, artist_id)?;
		}

		Ok(song)
	})
}

pub fn list_songs(
	conn: &mut SqliteConnection,
	filter: &SongFilter,
) -> Result<(Vec<SongResponse>, Metadata), ServiceError> {
	let paginator = Paginator::new(filter.page, filter.limit);

	let total_records: i64 = filtered(filter).count().get_result(conn)?;
	let records = filtered(filter)
		.order(songs::song_name.asc())
		.limit(paginator.limit)
		.offset(paginator.offset)
		.load::<Song>(conn)?;

	let mut responses = Vec::with_capacity(records.len());
	for song in records {
		responses.push(to_response(conn, song)?);
	}

	Ok((responses, paginator.metadata(total_records)))
}

pub fn get_song(conn: &mut SqliteConnection, id: &str) -> Result<Option<Song>, ServiceError> {
	let song = songs::table
		.filter(songs::song_id.eq(id))
		.first::<Song>(conn)
		.optional()?;
	Ok(song)
}

pub fn update_song(
	conn: &mut SqliteConnection,
	id: &str,
	changes: SongUpdate,
) -> Result<Option<Song>, ServiceError> {
	if changes.is_empty() {
		return Err(ServiceError::validation("Data for update cannot be empty"));
	}
	if get_song(conn, id)?.is_none() {
		return Ok(None);
	}
	if let Some(genre_id) = &changes.genre_id {
		let found: i64 = genres::table
			.filter(genres::genre_id.eq(genre_id))
			.count()
			.get_result(conn)?;
		if found == 0 {
			return Err(ServiceError::GenreNotFound);
		}
	}

	diesel::update(songs::table.filter(songs::song_id.eq(id)))
		.set(&changes)
		.execute(conn)?;

	get_song(conn, id)
}

pub fn update_streaming_count(
	conn: &mut SqliteConnection,
	id: &str,
	streaming_count: i32,
) -> Result<Option<Song>, ServiceError> {
	if streaming_count < 0 {
		return Err(ServiceError::validation("Streaming count cannot be negative"));
	}
	if get_song(conn, id)?.is_none() {
		return Ok(None);
	}

	diesel::update(songs::table.filter(songs::song_id.eq(id)))
		.set(songs::streaming_count.eq(streaming_count))
		.execute(conn)?;

	get_song(conn, id)
}

pub fn update_avatar(
	conn: &mut SqliteConnection,
	config: &Config,
	id: &str,
	stored: &str,
) -> Result<Option<Song>, ServiceError> {
	let Some(song) = get_song(conn, id)? else {
		return Ok(None);
	};

	diesel::update(songs::table.filter(songs::song_id.eq(id)))
		.set(songs::avatar.eq(stored))
		.execute(conn)?;

	if let Some(old) = &song.avatar {
		assets::remove_files(config, std::slice::from_ref(old));
	}
	get_song(conn, id)
}

pub fn update_sound(
	conn: &mut SqliteConnection,
	config: &Config,
	id: &str,
	stored: &str,
) -> Result<Option<Song>, ServiceError> {
	let Some(song) = get_song(conn, id)? else {
		return Ok(None);
	};

	diesel::update(songs::table.filter(songs::song_id.eq(id)))
		.set(songs::sound.eq(stored))
		.execute(conn)?;

	assets::remove_files(config, std::slice::from_ref(&song.sound));
	get_song(conn, id)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::services::testing::{insert_artist, song_exists};
	use crate::tunewave_db::db::establish_test_connection;

	fn new_song(name: &str, artist_ids: Vec<String>) -> NewSong {
		NewSong {
			song_name: name.to_string(),
			duration: 200,
			genre_id: None,
			release_date: None,
			sound: format!("public/sounds/{}.mp3", Uuid::new_v4()),
			avatar: None,
			artist_ids,
		}
	}

	#[test]
	fn creation_rolls_back_when_an_artist_is_missing() {
		let mut conn = establish_test_connection();
		let artist = insert_artist(&mut conn, "A1");

		let err = create_song(
			&mut conn,
			new_song("S1", vec![artist.artist_id.clone(), "missing".to_string()]),
		)
		.unwrap_err();
		assert!(matches!(err, ServiceError::ArtistNotFound));

		// Nothing of the failed creation survives.
		let count: i64 = songs::table.count().get_result(&mut conn).unwrap();
		assert_eq!(count, 0);
		let links: i64 = song_artists::table.count().get_result(&mut conn).unwrap();
		assert_eq!(links, 0);
	}

	#[test]
	fn creation_rejects_an_unknown_genre() {
		let mut conn = establish_test_connection();

		let mut payload = new_song("S1", Vec::new());
		payload.genre_id = Some("missing".to_string());
		let err = create_song(&mut conn, payload).unwrap_err();
		assert!(matches!(err, ServiceError::GenreNotFound));
	}

	#[test]
	fn detail_response_joins_linked_artist_names() {
		let mut conn = establish_test_connection();
		let a1 = insert_artist(&mut conn, "Alpha");
		let a2 = insert_artist(&mut conn, "Beta");
		let song = create_song(
			&mut conn,
			new_song("S1", vec![a1.artist_id.clone(), a2.artist_id.clone()]),
		)
		.unwrap();

		let response = to_response(&mut conn, song).unwrap();
		assert_eq!(response.artist_name.as_deref(), Some("Alpha, Beta"));
	}

	#[test]
	fn streaming_count_rejects_negative_values() {
		let mut conn = establish_test_connection();
		let song = create_song(&mut conn, new_song("S1", Vec::new())).unwrap();

		let err = update_streaming_count(&mut conn, &song.song_id, -1).unwrap_err();
		assert!(matches!(err, ServiceError::Validation(_)));

		let updated = update_streaming_count(&mut conn, &song.song_id, 42).unwrap().unwrap();
		assert_eq!(updated.streaming_count, 42);
		assert!(song_exists(&mut conn, &song.song_id));
	}
}
