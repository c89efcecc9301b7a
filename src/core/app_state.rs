use crate::config::Config;
use crate::tunewave_db::db::{generate_db_pool, DatabasePool};

#[derive(Debug, Clone)]
pub struct AppState {
	pub db_pool: DatabasePool,
	pub config: Config,
}

impl AppState {
	pub fn new(config: Config) -> AppState {
		AppState {
			db_pool: generate_db_pool(&config.database_url),
			config,
		}
	}
}
