//! Referential cleanup for artist and song deletion.
//!
//! Artist deletion removes the artist's junction rows, then deletes every song
//! left with no linked artist. Song deletion removes the song's junction rows
//! without touching the artists. Each multi-step sequence runs inside one
//! transaction; asset files are removed best-effort after the commit.

use crate::config::Config;
use crate::schema::{artists, song_artists, songs};
use crate::services::assets;
use crate::services::error::ServiceError;
use crate::tunewave_db::models::{Artist, Song, SongArtist};

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Deletes a song row and returns its asset paths for post-commit removal.
fn delete_song_row(conn: &mut SqliteConnection, id: &str) -> QueryResult<Vec<String>> {
	let song = songs::table
		.filter(songs::song_id.eq(id))
		.first::<Song>(conn)
		.optional()?;
	let Some(song) = song else {
		return Ok(Vec::new());
	};

	diesel::delete(songs::table.filter(songs::song_id.eq(id))).execute(conn)?;

	let mut staged = vec![song.sound];
	if let Some(avatar) = song.avatar {
		staged.push(avatar);
	}
	Ok(staged)
}

pub fn delete_artist(
	conn: &mut SqliteConnection,
	config: &Config,
	id: &str,
) -> Result<Option<Artist>, ServiceError> {
	let (deleted, staged) = conn.transaction::<_, DieselError, _>(|conn| {
		let artist = artists::table
			.filter(artists::artist_id.eq(id))
			.first::<Artist>(conn)
			.optional()?;
		let Some(artist) = artist else {
			return Ok((None, Vec::new()));
		};

		// Capture the affected songs before the junction rows disappear.
		let affected_songs: Vec<String> = song_artists::table
			.filter(song_artists::artist_id.eq(id))
			.select(song_artists::song_id)
			.load::<String>(conn)?;

		diesel::delete(song_artists::table.filter(song_artists::artist_id.eq(id))).execute(conn)?;

		// A song with no remaining linked artist is orphaned and goes with it.
		let mut staged = Vec::new();
		for song_id in &affected_songs {
			let remaining: i64 = song_artists::table
				.filter(song_artists::song_id.eq(song_id))
				.count()
				.get_result(conn)?;
			if remaining == 0 {
				staged.extend(delete_song_row(conn, song_id)?);
			}
		}

		diesel::delete(artists::table.filter(artists::artist_id.eq(id))).execute(conn)?;
		if let Some(avatar) = &artist.avatar {
			staged.push(avatar.clone());
		}

		Ok((Some(artist), staged))
	})?;

	assets::remove_files(config, &staged);
	Ok(deleted)
}

/// Full-domain reset: clears the junction table, every song and every artist,
/// regardless of link topology. Unlike per-artist deletion this intentionally
/// does not preserve songs that still have other artists.
pub fn delete_all_artists(conn: &mut SqliteConnection, config: &Config) -> Result<(), ServiceError> {
	let staged = conn.transaction::<_, DieselError, _>(|conn| {
		let mut staged = Vec::new();
		for (sound, avatar) in songs::table
			.select((songs::sound, songs::avatar))
			.load::<(String, Option<String>)>(conn)?
		{
			staged.push(sound);
			staged.extend(avatar);
		}
		let artist_avatars: Vec<Option<String>> = artists::table.select(artists::avatar).load(conn)?;
		staged.extend(artist_avatars.into_iter().flatten());

		diesel::delete(song_artists::table).execute(conn)?;
		diesel::delete(songs::table).execute(conn)?;
		diesel::delete(artists::table).execute(conn)?;
		Ok(staged)
	})?;

	assets::remove_files(config, &staged);
	Ok(())
}

pub fn delete_song(
	conn: &mut SqliteConnection,
	config: &Config,
	id: &str,
) -> Result<Option<Song>, ServiceError> {
	let (deleted, staged) = conn.transaction::<_, DieselError, _>(|conn| {
		let song = songs::table
			.filter(songs::song_id.eq(id))
			.first::<Song>(conn)
			.optional()?;
		let Some(song) = song else {
			return Ok((None, Vec::new()));
		};

		// Junction rows first; the linked artists themselves are untouched.
		diesel::delete(song_artists::table.filter(song_artists::song_id.eq(id))).execute(conn)?;
		let staged = delete_song_row(conn, id)?;

		Ok((Some(song), staged))
	})?;

	assets::remove_files(config, &staged);
	Ok(deleted)
}

pub fn delete_all_songs(conn: &mut SqliteConnection, config: &Config) -> Result<(), ServiceError> {
	let staged = conn.transaction::<_, DieselError, _>(|conn| {
		let mut staged = Vec::new();
		for (sound, avatar) in songs::table
			.select((songs::sound, songs::avatar))
			.load::<(String, Option<String>)>(conn)?
		{
			staged.push(sound);
			staged.extend(avatar);
		}

		diesel::delete(songs::table).execute(conn)?;
		diesel::delete(song_artists::table).execute(conn)?;
		Ok(staged)
	})?;

	assets::remove_files(config, &staged);
	Ok(())
}

/// Creates a song-artist association. Both referenced rows must exist, and the
/// pair must not already be present.
pub fn create_song_artist(
	conn: &mut SqliteConnection,
	song_id: &str,
	artist_id: &str,
) -> Result<SongArtist, ServiceError> {
	conn.transaction(|conn| {
		let song_exists: i64 = songs::table
			.filter(songs::song_id.eq(song_id))
			.count()
			.get_result(conn)?;
		if song_exists == 0 {
			return Err(ServiceError::SongNotFound);
		}

		let artist_exists: i64 = artists::table
			.filter(artists::artist_id.eq(artist_id))
			.count()
			.get_result(conn)?;
		if artist_exists == 0 {
			return Err(ServiceError::ArtistNotFound);
		}

		let association = SongArtist {
			song_id: song_id.to_string(),
			artist_id: artist_id.to_string(),
		};
		diesel::insert_into(song_artists::table)
			.values(&association)
			.execute(conn)
			.map_err(|err| match err {
				DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
					ServiceError::conflict("Song-artist association already exists")
				}
				other => other.into(),
			})?;

		Ok(association)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::services::testing::{
		artist_exists, insert_artist, insert_link, insert_song, link_exists, song_exists, test_config,
	};
	use crate::tunewave_db::db::establish_test_connection;

	use std::fs;

	fn config_for(dir: &tempfile::TempDir) -> Config {
		test_config(dir.path())
	}

	#[test]
	fn deleting_last_artist_removes_orphaned_songs() {
		let dir = tempfile::tempdir().unwrap();
		let config = config_for(&dir);
		let mut conn = establish_test_connection();

		// A1 is on S1 and S2; A2 only on S1.
		let a1 = insert_artist(&mut conn, "A1");
		let a2 = insert_artist(&mut conn, "A2");
		let s1 = insert_song(&mut conn, "S1");
		let s2 = insert_song(&mut conn, "S2");
		insert_link(&mut conn, &s1, &a1);
		insert_link(&mut conn, &s1, &a2);
		insert_link(&mut conn, &s2, &a1);

		let deleted = delete_artist(&mut conn, &config, &a1.artist_id).unwrap();
		assert_eq!(deleted.unwrap().artist_id, a1.artist_id);

		// S1 survives with its A2 link intact; S2 had only A1 and is gone.
		assert!(song_exists(&mut conn, &s1.song_id));
		assert!(!song_exists(&mut conn, &s2.song_id));
		assert!(!artist_exists(&mut conn, &a1.artist_id));
		assert!(link_exists(&mut conn, &s1.song_id, &a2.artist_id));
		assert!(!link_exists(&mut conn, &s1.song_id, &a1.artist_id));
		assert!(!link_exists(&mut conn, &s2.song_id, &a1.artist_id));
	}

	#[test]
	fn deleting_unknown_artist_reports_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let config = config_for(&dir);
		let mut conn = establish_test_connection();

		let deleted = delete_artist(&mut conn, &config, "missing").unwrap();
		assert!(deleted.is_none());
	}

	#[test]
	fn full_artist_reset_leaves_no_survivors() {
		let dir = tempfile::tempdir().unwrap();
		let config = config_for(&dir);
		let mut conn = establish_test_connection();

		let a1 = insert_artist(&mut conn, "A1");
		let a2 = insert_artist(&mut conn, "A2");
		let s1 = insert_song(&mut conn, "S1");
		let s2 = insert_song(&mut conn, "S2");
		insert_link(&mut conn, &s1, &a1);
		insert_link(&mut conn, &s1, &a2);
		// S2 has no artist at all; the full reset purges it anyway.
		let _ = s2;

		delete_all_artists(&mut conn, &config).unwrap();

		let songs_left: i64 = songs::table.count().get_result(&mut conn).unwrap();
		let artists_left: i64 = artists::table.count().get_result(&mut conn).unwrap();
		let links_left: i64 = song_artists::table.count().get_result(&mut conn).unwrap();
		assert_eq!((songs_left, artists_left, links_left), (0, 0, 0));
	}

	#[test]
	fn song_deletion_is_the_same_with_or_without_links() {
		let dir = tempfile::tempdir().unwrap();
		let config = config_for(&dir);
		let mut conn = establish_test_connection();

		let artist = insert_artist(&mut conn, "A1");
		let linked = insert_song(&mut conn, "linked");
		let loner = insert_song(&mut conn, "loner");
		insert_link(&mut conn, &linked, &artist);

		let deleted = delete_song(&mut conn, &config, &linked.song_id).unwrap();
		assert_eq!(deleted.unwrap().song_id, linked.song_id);
		assert!(!link_exists(&mut conn, &linked.song_id, &artist.artist_id));
		// The artist row is untouched by song deletion.
		assert!(artist_exists(&mut conn, &artist.artist_id));

		let deleted = delete_song(&mut conn, &config, &loner.song_id).unwrap();
		assert_eq!(deleted.unwrap().song_id, loner.song_id);
		assert!(!song_exists(&mut conn, &loner.song_id));
	}

	#[test]
	fn song_deletion_removes_owned_files_but_not_the_default_avatar() {
		let dir = tempfile::tempdir().unwrap();
		let config = config_for(&dir);
		let mut conn = establish_test_connection();

		let song = insert_song(&mut conn, "S1");
		let sound_path = dir.path().join(&song.sound);
		fs::create_dir_all(sound_path.parent().unwrap()).unwrap();
		fs::write(&sound_path, b"mp3").unwrap();

		let default_path = dir.path().join(crate::config::DEFAULT_AVATAR);
		fs::create_dir_all(default_path.parent().unwrap()).unwrap();
		fs::write(&default_path, b"png").unwrap();
		diesel::update(songs::table.filter(songs::song_id.eq(&song.song_id)))
			.set(songs::avatar.eq(crate::config::DEFAULT_AVATAR))
			.execute(&mut conn)
			.unwrap();

		delete_song(&mut conn, &config, &song.song_id).unwrap();

		assert!(!sound_path.exists());
		assert!(default_path.exists());
	}

	#[test]
	fn delete_all_songs_clears_the_junction_table() {
		let dir = tempfile::tempdir().unwrap();
		let config = config_for(&dir);
		let mut conn = establish_test_connection();

		let artist = insert_artist(&mut conn, "A1");
		let song = insert_song(&mut conn, "S1");
		insert_link(&mut conn, &song, &artist);

		delete_all_songs(&mut conn, &config).unwrap();

		let songs_left: i64 = songs::table.count().get_result(&mut conn).unwrap();
		let links_left: i64 = song_artists::table.count().get_result(&mut conn).unwrap();
		assert_eq!((songs_left, links_left), (0, 0));
		// Artists stay: delete-all-songs is not the full catalog reset.
		assert!(artist_exists(&mut conn, &artist.artist_id));
	}

	#[test]
	fn association_creation_is_referentially_guarded() {
		let dir = tempfile::tempdir().unwrap();
		let _config = config_for(&dir);
		let mut conn = establish_test_connection();

		let artist = insert_artist(&mut conn, "A1");
		let song = insert_song(&mut conn, "S1");

		let err = create_song_artist(&mut conn, "missing", &artist.artist_id).unwrap_err();
		assert!(matches!(err, ServiceError::SongNotFound));

		let err = create_song_artist(&mut conn, &song.song_id, "missing").unwrap_err();
		assert!(matches!(err, ServiceError::ArtistNotFound));

		create_song_artist(&mut conn, &song.song_id, &artist.artist_id).unwrap();
		assert!(link_exists(&mut conn, &song.song_id, &artist.artist_id));

		let err = create_song_artist(&mut conn, &song.song_id, &artist.artist_id).unwrap_err();
		assert!(matches!(err, ServiceError::Conflict(_)));
	}
}
