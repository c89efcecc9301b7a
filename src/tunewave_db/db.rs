use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DatabasePool = Pool<ConnectionManager<SqliteConnection>>;

pub fn generate_db_pool(database_url: &str) -> DatabasePool {
	let manager = ConnectionManager::<SqliteConnection>::new(database_url);
	Pool::builder().max_size(5).build(manager).expect("Failed to create pool")
}

#[cfg(test)]
pub fn establish_test_connection() -> SqliteConnection {
	use diesel_migrations::MigrationHarness;

	let mut conn = SqliteConnection::establish(":memory:").expect("Failed to open in-memory database");
	conn.run_pending_migrations(crate::core::migrations::MIGRATIONS)
		.expect("Failed to run migrations");
	conn
}
