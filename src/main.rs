mod config;
mod core;
mod routes;
mod schema;
mod services;
mod tunewave_db;
mod utils;

use crate::config::Config;
use crate::core::app_state::AppState;
use crate::core::migrations::run_migrations;
use crate::core::routes::configure_routes;
use crate::core::server::{configure_cors, logger, start_server};

use axum::middleware;
use dotenv::dotenv;

#[tokio::main]
async fn main() {
	dotenv().ok();

	let config = Config::from_env();
	run_migrations(&config.database_url);

	let app_state = AppState::new(config.clone());
	let app = configure_routes(app_state)
		.layer(middleware::from_fn(logger))
		.layer(configure_cors(&config));

	start_server(app, &config.ip, &config.port).await;
}
