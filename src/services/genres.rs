use crate::schema::{genres, songs};
use crate::services::error::ServiceError;
use crate::services::pagination::{Metadata, Paginator};
use crate::tunewave_db::models::Genre;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::Sqlite;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct NewGenre {
	pub genre_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreFilter {
	pub genre_name: Option<String>,
	pub page: Option<i64>,
	pub limit: Option<i64>,
}

fn filtered(filter: &GenreFilter) -> genres::BoxedQuery<'static, Sqlite> {
	let mut query = genres::table.into_boxed();
	if let Some(name) = &filter.genre_name {
		query = query.filter(genres::genre_name.like(format!("%{name}%")));
	}
	query
}

/// Case-insensitive lookup; the genre_name column carries COLLATE NOCASE, so a
/// plain equality comparison ignores case.
fn name_taken(conn: &mut SqliteConnection, name: &str, excluding: Option<&str>) -> QueryResult<bool> {
	let mut query = genres::table.filter(genres::genre_name.eq(name)).into_boxed();
	if let Some(id) = excluding {
		query = query.filter(genres::genre_id.ne(id));
	}
	let matches: i64 = query.count().get_result(conn)?;
	Ok(matches > 0)
}

pub fn create_genre(conn: &mut SqliteConnection, payload: NewGenre) -> Result<Genre, ServiceError> {
	if payload.genre_name.trim().is_empty() {
		return Err(ServiceError::validation("Genre name should be a non-empty string"));
	}
	if name_taken(conn, &payload.genre_name, None)? {
		return Err(ServiceError::conflict(format!(
			"Genre {} already exists",
			payload.genre_name
		)));
	}

	let genre = Genre {
		genre_id: Uuid::new_v4().to_string(),
		genre_name: payload.genre_name,
	};

	diesel::insert_into(genres::table)
		.values(&genre)
		.execute(conn)
		.map_err(|err| match &err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
				ServiceError::conflict(format!("Genre {} already exists", genre.genre_name))
			}
			_ => err.into(),
		})?;

	Ok(genre)
}

pub fn list_genres(conn: &mut SqliteConnection, filter: &GenreFilter) -> Result<(Vec<Genre>, Metadata), ServiceError> {
	let paginator = Paginator::new(filter.page, filter.limit);

	let total_records: i64 = filtered(filter).count().get_result(conn)?;
	let records = filtered(filter)
		.order(genres::genre_name.asc())
		.limit(paginator.limit)
		.offset(paginator.offset)
		.load::<Genre>(conn)?;

	Ok((records, paginator.metadata(total_records)))
}

pub fn get_genre(conn: &mut SqliteConnection, id: &str) -> Result<Option<Genre>, ServiceError> {
	let genre = genres::table
		.filter(genres::genre_id.eq(id))
		.first::<Genre>(conn)
		.optional()?;
	Ok(genre)
}

pub fn update_genre(conn: &mut SqliteConnection, id: &str, payload: NewGenre) -> Result<Option<Genre>, ServiceError> {
	if payload.genre_name.trim().is_empty() {
		return Err(ServiceError::validation("Genre name should be a non-empty string"));
	}
	if get_genre(conn, id)?.is_none() {
		return Ok(None);
	}
	if name_taken(conn, &payload.genre_name, Some(id))? {
		return Err(ServiceError::conflict(format!(
			"Genre {} already exists",
			payload.genre_name
		)));
	}

	diesel::update(genres::table.filter(genres::genre_id.eq(id)))
		.set(genres::genre_name.eq(&payload.genre_name))
		.execute(conn)?;

	get_genre(conn, id)
}

/// Deleting a genre leaves its songs in place with a nulled genre reference.
pub fn delete_genre(conn: &mut SqliteConnection, id: &str) -> Result<Option<Genre>, ServiceError> {
	conn.transaction(|conn| {
		let Some(genre) = get_genre(conn, id)? else {
			return Ok(None);
		};

		diesel::update(songs::table.filter(songs::genre_id.eq(id)))
			.set(songs::genre_id.eq(None::<String>))
			.execute(conn)?;
		diesel::delete(genres::table.filter(genres::genre_id.eq(id))).execute(conn)?;

		Ok(Some(genre))
	})
}

pub fn delete_all_genres(conn: &mut SqliteConnection) -> Result<(), ServiceError> {
	conn.transaction(|conn| {
		diesel::update(songs::table)
			.set(songs::genre_id.eq(None::<String>))
			.execute(conn)?;
		diesel::delete(genres::table).execute(conn)?;
		Ok(())
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::services::testing::insert_song;
	use crate::tunewave_db::db::establish_test_connection;

	fn create(conn: &mut SqliteConnection, name: &str) -> Genre {
		create_genre(
			conn,
			NewGenre {
				genre_name: name.to_string(),
			},
		)
		.unwrap()
	}

	#[test]
	fn genre_names_are_unique_case_insensitively() {
		let mut conn = establish_test_connection();
		create(&mut conn, "Rock");

		let err = create_genre(
			&mut conn,
			NewGenre {
				genre_name: "rock".to_string(),
			},
		)
		.unwrap_err();
		assert!(matches!(err, ServiceError::Conflict(_)));
	}

	#[test]
	fn update_may_keep_its_own_name() {
		let mut conn = establish_test_connection();
		let genre = create(&mut conn, "Rock");

		// Re-casing the genre's own name is not a conflict with itself.
		let updated = update_genre(
			&mut conn,
			&genre.genre_id,
			NewGenre {
				genre_name: "ROCK".to_string(),
			},
		)
		.unwrap()
		.unwrap();
		assert_eq!(updated.genre_name, "ROCK");
	}

	#[test]
	fn deleting_a_genre_nulls_song_references() {
		let mut conn = establish_test_connection();
		let genre = create(&mut conn, "Rock");
		let song = insert_song(&mut conn, "S1");
		diesel::update(songs::table.filter(songs::song_id.eq(&song.song_id)))
			.set(songs::genre_id.eq(&genre.genre_id))
			.execute(&mut conn)
			.unwrap();

		delete_genre(&mut conn, &genre.genre_id).unwrap().unwrap();

		let remaining: Option<String> = songs::table
			.filter(songs::song_id.eq(&song.song_id))
			.select(songs::genre_id)
			.first(&mut conn)
			.unwrap();
		assert!(remaining.is_none());
	}
}
