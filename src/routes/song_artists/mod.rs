pub mod create_song_artist;
pub mod delete_by_artist;
pub mod delete_by_song;
pub mod delete_song_artist;
