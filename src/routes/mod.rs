pub mod artists;
pub mod auth;
pub mod genres;
pub mod song_artists;
pub mod songs;
pub mod users;
