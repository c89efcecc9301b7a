pub mod create_artist;
pub mod delete_all_artists;
pub mod delete_artist;
pub mod get_artist;
pub mod get_artist_songs;
pub mod get_artists;
pub mod update_artist;
pub mod update_avatar;
