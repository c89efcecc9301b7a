use crate::config::{Config, DEFAULT_AVATAR};
use crate::schema::artists;
use crate::services::assets;
use crate::services::error::ServiceError;
use crate::services::pagination::{Metadata, Paginator};
use crate::tunewave_db::models::{Artist, ArtistUpdate};

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::Sqlite;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct NewArtist {
	pub artist_name: String,
	pub bio: Option<String>,
	pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtistFilter {
	pub artist_name: Option<String>,
	pub country: Option<String>,
	pub page: Option<i64>,
	pub limit: Option<i64>,
}

fn filtered(filter: &ArtistFilter) -> artists::BoxedQuery<'static, Sqlite> {
	let mut query = artists::table.into_boxed();
	if let Some(name) = &filter.artist_name {
		query = query.filter(artists::artist_name.like(format!("%{name}%")));
	}
	if let Some(country) = &filter.country {
		query = query.filter(artists::country.like(format!("%{country}%")));
	}
	query
}

pub fn create_artist(conn: &mut SqliteConnection, payload: NewArtist) -> Result<Artist, ServiceError> {
	if payload.artist_name.trim().is_empty() {
		return Err(ServiceError::validation("Artist name should be a non-empty string"));
	}

	let artist = Artist {
		artist_id: Uuid::new_v4().to_string(),
		artist_name: payload.artist_name,
		bio: payload.bio,
		country: payload.country,
		avatar: Some(DEFAULT_AVATAR.to_string()),
	};

	diesel::insert_into(artists::table)
		.values(&artist)
		.execute(conn)
		.map_err(|err| match &err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
				ServiceError::conflict(format!("Artist {} already exists", artist.artist_name))
			}
			_ => err.into(),
		})?;

	Ok(artist)
}

pub fn list_artists(
	conn: &mut SqliteConnection,
	filter: &ArtistFilter,
) -> Result<(Vec<Artist>, Metadata), ServiceError> {
	let paginator = Paginator::new(filter.page, filter.limit);

	let total_records: i64 = filtered(filter).count().get_result(conn)?;
	let records = filtered(filter)
		.order(artists::artist_name.asc())
		.limit(paginator.limit)
		.offset(paginator.offset)
		.load::<Artist>(conn)?;

	Ok((records, paginator.metadata(total_records)))
}

pub fn get_artist(conn: &mut SqliteConnection, id: &str) -> Result<Option<Artist>, ServiceError> {
	let artist = artists::table
		.filter(artists::artist_id.eq(id))
		.first::<Artist>(conn)
		.optional()?;
	Ok(artist)
}

pub fn update_artist(
	conn: &mut SqliteConnection,
	id: &str,
	changes: ArtistUpdate,
) -> Result<Option<Artist>, ServiceError> {
	if changes.is_empty() {
		return Err(ServiceError::validation("Data for update cannot be empty"));
	}
	if get_artist(conn, id)?.is_none() {
		return Ok(None);
	}

	diesel::update(artists::table.filter(artists::artist_id.eq(id)))
		.set(&changes)
		.execute(conn)
		.map_err(|err| match &err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
				ServiceError::conflict("Artist name is already taken")
			}
			_ => err.into(),
		})?;

	get_artist(conn, id)
}

pub fn update_avatar(
	conn: &mut SqliteConnection,
	config: &Config,
	id: &str,
	stored: &str,
) -> Result<Option<Artist>, ServiceError> {
	let Some(artist) = get_artist(conn, id)? else {
		return Ok(None);
	};

	diesel::update(artists::table.filter(artists::artist_id.eq(id)))
		.set(artists::avatar.eq(stored))
		.execute(conn)?;

	if let Some(old) = &artist.avatar {
		assets::remove_files(config, std::slice::from_ref(old));
	}
	get_artist(conn, id)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::services::testing::insert_artist;
	use crate::tunewave_db::db::establish_test_connection;

	#[test]
	fn duplicate_artist_name_is_a_conflict() {
		let mut conn = establish_test_connection();
		insert_artist(&mut conn, "Daft Punk");

		let err = create_artist(
			&mut conn,
			NewArtist {
				artist_name: "Daft Punk".to_string(),
				bio: None,
				country: None,
			},
		)
		.unwrap_err();
		assert!(matches!(err, ServiceError::Conflict(_)));
	}

	#[test]
	fn country_filter_is_a_substring_match() {
		let mut conn = establish_test_connection();
		for (name, country) in [("A", "France"), ("B", "Germany"), ("C", "france")] {
			create_artist(
				&mut conn,
				NewArtist {
					artist_name: name.to_string(),
					bio: None,
					country: Some(country.to_string()),
				},
			)
			.unwrap();
		}

		let filter = ArtistFilter {
			country: Some("fran".to_string()),
			..ArtistFilter::default()
		};
		let (records, metadata) = list_artists(&mut conn, &filter).unwrap();
		// LIKE is case-insensitive, so both France and france match.
		assert_eq!(records.len(), 2);
		assert_eq!(metadata.total_records, 2);
	}

	#[test]
	fn update_merges_only_the_supplied_fields() {
		let mut conn = establish_test_connection();
		let artist = create_artist(
			&mut conn,
			NewArtist {
				artist_name: "Original".to_string(),
				bio: Some("bio".to_string()),
				country: Some("US".to_string()),
			},
		)
		.unwrap();

		let updated = update_artist(
			&mut conn,
			&artist.artist_id,
			ArtistUpdate {
				country: Some("UK".to_string()),
				..ArtistUpdate::default()
			},
		)
		.unwrap()
		.unwrap();

		assert_eq!(updated.artist_name, "Original");
		assert_eq!(updated.bio.as_deref(), Some("bio"));
		assert_eq!(updated.country.as_deref(), Some("UK"));
	}
}
