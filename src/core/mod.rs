pub mod app_state;
pub mod auth;
pub mod migrations;
pub mod routes;
pub mod server;
