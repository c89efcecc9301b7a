use crate::schema::{artists, song_artists, songs};
use crate::services::error::ServiceError;
use crate::tunewave_db::models::{Artist, Song, SongArtist};

use diesel::prelude::*;

pub fn artists_by_song(conn: &mut SqliteConnection, song_id: &str) -> Result<Vec<Artist>, ServiceError> {
	let records = song_artists::table
		.inner_join(artists::table)
		.filter(song_artists::song_id.eq(song_id))
		.select(Artist::as_select())
		.order(artists::artist_name.asc())
		.load::<Artist>(conn)?;
	Ok(records)
}

pub fn songs_by_artist(conn: &mut SqliteConnection, artist_id: &str) -> Result<Vec<Song>, ServiceError> {
	let records = song_artists::table
		.inner_join(songs::table)
		.filter(song_artists::artist_id.eq(artist_id))
		.select(Song::as_select())
		.order(songs::song_name.asc())
		.load::<Song>(conn)?;
	Ok(records)
}

pub fn delete_pair(
	conn: &mut SqliteConnection,
	song_id: &str,
	artist_id: &str,
) -> Result<Option<SongArtist>, ServiceError> {
	let association = song_artists::table
		.filter(song_artists::song_id.eq(song_id))
		.filter(song_artists::artist_id.eq(artist_id))
		.first::<SongArtist>(conn)
		.optional()?;
	let Some(association) = association else {
		return Ok(None);
	};

	diesel::delete(
		song_artists::table
			.filter(song_artists::song_id.eq(song_id))
			.filter(song_artists::artist_id.eq(artist_id)),
	)
	.execute(conn)?;

	Ok(Some(association))
}

pub fn delete_by_song(conn: &mut SqliteConnection, song_id: &str) -> Result<usize, ServiceError> {
	let removed = diesel::delete(song_artists::table.filter(song_artists::song_id.eq(song_id))).execute(conn)?;
	Ok(removed)
}

pub fn delete_by_artist(conn: &mut SqliteConnection, artist_id: &str) -> Result<usize, ServiceError> {
	let removed = diesel::delete(song_artists::table.filter(song_artists::artist_id.eq(artist_id))).execute(conn)?;
	Ok(removed)
}
