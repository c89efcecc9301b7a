pub mod artists;
pub mod assets;
pub mod cascade;
pub mod error;
pub mod genres;
pub mod pagination;
pub mod song_artists;
pub mod songs;
pub mod users;

#[cfg(test)]
pub(crate) mod testing {
	use crate::config::Config;
	use crate::schema::{artists, song_artists, songs};
	use crate::tunewave_db::models::{Artist, Song, SongArtist};

	use diesel::prelude::*;
	use std::path::Path;
	use uuid::Uuid;

	pub fn test_config(root: &Path) -> Config {
		Config {
			database_url: ":memory:".to_string(),
			ip: "127.0.0.1".to_string(),
			port: "0".to_string(),
			jwt_secret: "test-secret".to_string(),
			asset_root: root.to_path_buf(),
			allowed_origins: Vec::new(),
		}
	}

	pub fn insert_artist(conn: &mut SqliteConnection, name: &str) -> Artist {
		let artist = Artist {
			artist_id: Uuid::new_v4().to_string(),
			artist_name: name.to_string(),
			bio: None,
			country: None,
			avatar: Some(format!("public/images/{}.png", Uuid::new_v4())),
		};
		diesel::insert_into(artists::table)
			.values(&artist)
			.execute(conn)
			.unwrap();
		artist
	}

	pub fn insert_song(conn: &mut SqliteConnection, name: &str) -> Song {
		let song_id = Uuid::new_v4().to_string();
		let song = Song {
			song_id: song_id.clone(),
			song_name: name.to_string(),
			duration: 180,
			genre_id: None,
			release_date: None,
			streaming_count: 0,
			sound: format!("public/sounds/{song_id}.mp3"),
			avatar: None,
		};
		diesel::insert_into(songs::table).values(&song).execute(conn).unwrap();
		song
	}

	pub fn insert_link(conn: &mut SqliteConnection, song: &Song, artist: &Artist) {
		let link = SongArtist {
			song_id: song.song_id.clone(),
			artist_id: artist.artist_id.clone(),
		};
		diesel::insert_into(song_artists::table)
			.values(&link)
			.execute(conn)
			.unwrap();
	}

	pub fn song_exists(conn: &mut SqliteConnection, id: &str) -> bool {
		songs::table
			.filter(songs::song_id.eq(id))
			.first::<Song>(conn)
			.optional()
			.unwrap()
			.is_some()
	}

	pub fn artist_exists(conn: &mut SqliteConnection, id: &str) -> bool {
		artists::table
			.filter(artists::artist_id.eq(id))
			.first::<Artist>(conn)
			.optional()
			.unwrap()
			.is_some()
	}

	pub fn link_exists(conn: &mut SqliteConnection, song_id: &str, artist_id: &str) -> bool {
		song_artists::table
			.filter(song_artists::song_id.eq(song_id))
			.filter(song_artists::artist_id.eq(artist_id))
			.first::<SongArtist>(conn)
			.optional()
			.unwrap()
			.is_some()
	}
}
