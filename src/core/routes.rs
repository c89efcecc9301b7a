use crate::core::app_state::AppState;
use crate::core::auth::{require_admin, require_auth, require_regular};
use crate::routes::{artists, auth, genres, song_artists, songs, users};
use crate::utils::response;

use axum::{
	middleware,
	response::Response,
	routing::{delete, get, post, put},
	Router,
};
use serde_json::json;
use tower_http::services::ServeDir;

async fn index() -> Response<String> {
	response::success(json!({ "message": "Welcome to the TuneWave API" }))
}

/// Four layers of access: public signup/login, read access for any
/// authenticated user, catalog mutation for admins, and a pair of
/// regular-user-only operations.
pub fn configure_routes(app_state: AppState) -> Router {
	let public = Router::new()
		.route("/users", post(users::create_user::create_user))
		.route("/auth/login", post(auth::login::login));

	let authenticated = Router::new()
		.route("/users", get(users::get_users::get_users))
		.route("/users/:id", get(users::get_user::get_user))
		.route("/users/:id", put(users::update_user::update_user))
		.route("/users/:id/avatar", put(users::update_avatar::update_user_avatar))
		.route("/artists", get(artists::get_artists::get_artists))
		.route("/artists/:id", get(artists::get_artist::get_artist))
		.route("/artists/:id/songs", get(artists::get_artist_songs::get_artist_songs))
		.route("/genres", get(genres::get_genres::get_genres))
		.route("/genres/:id", get(genres::get_genre::get_genre))
		.route("/songs", get(songs::get_songs::get_songs))
		.route("/songs/:id", get(songs::get_song::get_song))
		.route("/songs/:id/artists", get(songs::get_song_artists::get_song_artists))
		.route_layer(middleware::from_fn_with_state(app_state.clone(), require_auth));

	let admin = Router::new()
		.route("/users", delete(users::delete_all_users::delete_all_users))
		.route("/users/:id", delete(users::delete_user::delete_user))
		.route("/artists", post(artists::create_artist::create_artist))
		.route("/artists", delete(artists::delete_all_artists::delete_all_artists))
		.route("/artists/:id", put(artists::update_artist::update_artist))
		.route("/artists/:id", delete(artists::delete_artist::delete_artist))
		.route("/artists/:id/avatar", put(artists::update_avatar::update_artist_avatar))
		.route("/genres", post(genres::create_genre::create_genre))
		.route("/genres", delete(genres::delete_all_genres::delete_all_genres))
		.route("/genres/:id", put(genres::update_genre::update_genre))
		.route("/genres/:id", delete(genres::delete_genre::delete_genre))
		.route("/songs", post(songs::create_song::create_song))
		.route("/songs", delete(songs::delete_all_songs::delete_all_songs))
		.route("/songs/:id", put(songs::update_song::update_song))
		.route("/songs/:id", delete(songs::delete_song::delete_song))
		.route("/songs/:id/avatar", put(songs::update_avatar::update_song_avatar))
		.route("/songs/:id/sound", put(songs::update_sound::update_song_sound))
		.route(
			"/song_artists",
			post(song_artists::create_song_artist::create_song_artist),
		)
		.route(
			"/song_artists/:song_id/:artist_id",
			delete(song_artists::delete_song_artist::delete_song_artist),
		)
		.route(
			"/song_artists/songs/:song_id",
			delete(song_artists::delete_by_song::delete_song_artists_by_song),
		)
		.route(
			"/song_artists/artists/:artist_id",
			delete(song_artists::delete_by_artist::delete_song_artists_by_artist),
		)
		.route_layer(middleware::from_fn_with_state(app_state.clone(), require_admin));

	let regular_only = Router::new()
		.route("/users/:id/password", put(users::change_password::change_password))
		.route(
			"/songs/:id/streaming_count",
			put(songs::update_streaming_count::update_streaming_count),
		)
		.route_layer(middleware::from_fn_with_state(app_state.clone(), require_regular));

	let api = public.merge(authenticated).merge(admin).merge(regular_only);

	Router::new()
		.route("/", get(index))
		.nest("/api/v1", api)
		.nest_service(
			"/public",
			ServeDir::new(app_state.config.asset_root.join("public")),
		)
		.with_state(app_state)
}
