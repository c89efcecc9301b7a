pub mod create_song;
pub mod delete_all_songs;
pub mod delete_song;
pub mod get_song;
pub mod get_song_artists;
pub mod get_songs;
pub mod update_avatar;
pub mod update_song;
pub mod update_sound;
pub mod update_streaming_count;
