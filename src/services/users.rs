use crate::config::{Config, DEFAULT_AVATAR};
use crate::schema::users;
use crate::services::assets;
use crate::services::error::ServiceError;
use crate::services::pagination::{Metadata, Paginator};
use crate::tunewave_db::models::{User, UserUpdate};

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::Sqlite;
use pwhash::bcrypt;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct NewUser {
	pub username: String,
	pub email: String,
	pub password: String,
	pub full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserFilter {
	pub username: Option<String>,
	pub email: Option<String>,
	pub page: Option<i64>,
	pub limit: Option<i64>,
}

fn filtered(filter: &UserFilter) -> users::BoxedQuery<'static, Sqlite> {
	let mut query = users::table.into_boxed();
	if let Some(username) = &filter.username {
		query = query.filter(users::username.like(format!("%{username}%")));
	}
	if let Some(email) = &filter.email {
		query = query.filter(users::email.like(format!("%{email}%")));
	}
	query
}

pub fn create_user(conn: &mut SqliteConnection, payload: NewUser) -> Result<User, ServiceError> {
	if payload.username.trim().is_empty() {
		return Err(ServiceError::validation("Username should be a non-empty string"));
	}
	if payload.email.trim().is_empty() {
		return Err(ServiceError::validation("Email should be a non-empty string"));
	}
	if payload.password.is_empty() {
		return Err(ServiceError::validation("Password should be a non-empty string"));
	}

	let user = User {
		user_id: Uuid::new_v4().to_string(),
		username: payload.username,
		email: payload.email,
		pwd_hash: bcrypt::hash(&payload.password)?,
		full_name: payload.full_name,
		signup_date: Utc::now().to_rfc3339(),
		avatar: Some(DEFAULT_AVATAR.to_string()),
		role: 0,
	};

	diesel::insert_into(users::table)
		.values(&user)
		.execute(conn)
		.map_err(|err| match &err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) if info.message().contains("username") => {
				ServiceError::conflict(format!("Username {} is already registered", user.username))
			}
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
				ServiceError::conflict(format!("Email {} is already registered", user.email))
			}
			_ => err.into(),
		})?;

	Ok(user)
}

pub fn list_users(conn: &mut SqliteConnection, filter: &UserFilter) -> Result<(Vec<User>, Metadata), ServiceError> {
	let paginator = Paginator::new(filter.page, filter.limit);

	let total_records: i64 = filtered(filter).count().get_result(conn)?;
	let records = filtered(filter)
		.order(users::username.asc())
		.limit(paginator.limit)
		.offset(paginator.offset)
		.load::<User>(conn)?;

	Ok((records, paginator.metadata(total_records)))
}

pub fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<Option<User>, ServiceError> {
	let user = users::table
		.filter(users::user_id.eq(id))
		.first::<User>(conn)
		.optional()?;
	Ok(user)
}

pub fn find_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>, ServiceError> {
	let user = users::table
		.filter(users::email.eq(email))
		.first::<User>(conn)
		.optional()?;
	Ok(user)
}

pub fn update_user(
	conn: &mut SqliteConnection,
	id: &str,
	changes: UserUpdate,
) -> Result<Option<User>, ServiceError> {
	if changes.is_empty() {
		return Err(ServiceError::validation("Data for update cannot be empty"));
	}
	if get_user(conn, id)?.is_none() {
		return Ok(None);
	}

	diesel::update(users::table.filter(users::user_id.eq(id)))
		.set(&changes)
		.execute(conn)
		.map_err(|err| match &err {
			DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
				ServiceError::conflict("Username or email is already registered")
			}
			_ => err.into(),
		})?;

	get_user(conn, id)
}

/// Verifies the old password against the stored hash before accepting the new
/// one. A missing user and a wrong old password are distinct outcomes.
pub fn update_password(
	conn: &mut SqliteConnection,
	id: &str,
	old_password: &str,
	new_password: &str,
) -> Result<Option<User>, ServiceError> {
	let Some(user) = get_user(conn, id)? else {
		return Ok(None);
	};

	if !bcrypt::verify(old_password, &user.pwd_hash) {
		return Err(ServiceError::IncorrectPassword);
	}
	if new_password.is_empty() {
		return Err(ServiceError::validation("New password should be a non-empty string"));
	}

	let new_hash = bcrypt::hash(new_password)?;
	diesel::update(users::table.filter(users::user_id.eq(id)))
		.set(users::pwd_hash.eq(new_hash))
		.execute(conn)?;

	get_user(conn, id)
}

pub fn update_avatar(
	conn: &mut SqliteConnection,
	config: &Config,
	id: &str,
	stored: &str,
) -> Result<Option<User>, ServiceError> {
	let Some(user) = get_user(conn, id)? else {
		return Ok(None);
	};

	diesel::update(users::table.filter(users::user_id.eq(id)))
		.set(users::avatar.eq(stored))
		.execute(conn)?;

	if let Some(old) = &user.avatar {
		assets::remove_files(config, std::slice::from_ref(old));
	}
	get_user(conn, id)
}

pub fn delete_user(conn: &mut SqliteConnection, config: &Config, id: &str) -> Result<Option<User>, ServiceError> {
	let Some(user) = get_user(conn, id)? else {
		return Ok(None);
	};

	diesel::delete(users::table.filter(users::user_id.eq(id))).execute(conn)?;
	if let Some(avatar) = &user.avatar {
		assets::remove_files(config, std::slice::from_ref(avatar));
	}
	Ok(Some(user))
}

pub fn delete_all_users(conn: &mut SqliteConnection, config: &Config) -> Result<(), ServiceError> {
	let avatars: Vec<Option<String>> = users::table.select(users::avatar).load(conn)?;
	diesel::delete(users::table).execute(conn)?;

	let staged: Vec<String> = avatars.into_iter().flatten().collect();
	assets::remove_files(config, &staged);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tunewave_db::db::establish_test_connection;

	fn signup(conn: &mut SqliteConnection, username: &str, email: &str, password: &str) -> User {
		create_user(
			conn,
			NewUser {
				username: username.to_string(),
				email: email.to_string(),
				password: password.to_string(),
				full_name: None,
			},
		)
		.unwrap()
	}

	#[test]
	fn create_hashes_the_password() {
		let mut conn = establish_test_connection();
		let user = signup(&mut conn, "alice", "alice@example.com", "hunter2");

		assert_ne!(user.pwd_hash, "hunter2");
		assert!(bcrypt::verify("hunter2", &user.pwd_hash));
		assert_eq!(user.role, 0);
		assert_eq!(user.avatar.as_deref(), Some(DEFAULT_AVATAR));
	}

	#[test]
	fn duplicate_username_and_email_are_conflicts() {
		let mut conn = establish_test_connection();
		signup(&mut conn, "alice", "alice@example.com", "hunter2");

		let err = create_user(
			&mut conn,
			NewUser {
				username: "alice".to_string(),
				email: "other@example.com".to_string(),
				password: "pw".to_string(),
				full_name: None,
			},
		)
		.unwrap_err();
		assert!(matches!(err, ServiceError::Conflict(_)));

		let err = create_user(
			&mut conn,
			NewUser {
				username: "bob".to_string(),
				email: "alice@example.com".to_string(),
				password: "pw".to_string(),
				full_name: None,
			},
		)
		.unwrap_err();
		assert!(matches!(err, ServiceError::Conflict(_)));
	}

	#[test]
	fn password_change_distinguishes_missing_user_from_wrong_password() {
		let mut conn = establish_test_connection();
		let user = signup(&mut conn, "alice", "alice@example.com", "hunter2");

		let missing = update_password(&mut conn, "missing", "hunter2", "next").unwrap();
		assert!(missing.is_none());

		let err = update_password(&mut conn, &user.user_id, "wrong", "next").unwrap_err();
		assert!(matches!(err, ServiceError::IncorrectPassword));

		let updated = update_password(&mut conn, &user.user_id, "hunter2", "next")
			.unwrap()
			.unwrap();
		assert_ne!(updated.pwd_hash, user.pwd_hash);
		assert_ne!(updated.pwd_hash, "next");
		assert!(bcrypt::verify("next", &updated.pwd_hash));
	}

	#[test]
	fn empty_update_payload_is_rejected() {
		let mut conn = establish_test_connection();
		let user = signup(&mut conn, "alice", "alice@example.com", "hunter2");

		let err = update_user(&mut conn, &user.user_id, UserUpdate::default()).unwrap_err();
		assert!(matches!(err, ServiceError::Validation(_)));
	}

	#[test]
	fn listing_filters_by_username_substring() {
		let mut conn = establish_test_connection();
		signup(&mut conn, "alice", "alice@example.com", "pw");
		signup(&mut conn, "alicia", "alicia@example.com", "pw");
		signup(&mut conn, "bob", "bob@example.com", "pw");

		let filter = UserFilter {
			username: Some("ali".to_string()),
			..UserFilter::default()
		};
		let (records, metadata) = list_users(&mut conn, &filter).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(metadata.total_records, 2);
		assert_eq!(metadata.last_page, 1);
	}

	#[test]
	fn pagination_returns_the_remainder_on_the_last_page() {
		let mut conn = establish_test_connection();
		for i in 0..7 {
			signup(&mut conn, &format!("user{i}"), &format!("user{i}@example.com"), "pw");
		}

		let filter = UserFilter {
			page: Some(2),
			limit: Some(5),
			..UserFilter::default()
		};
		let (records, metadata) = list_users(&mut conn, &filter).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(metadata.total_records, 7);
		assert_eq!(metadata.last_page, 2);
	}
}
