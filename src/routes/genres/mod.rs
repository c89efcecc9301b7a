pub mod create_genre;
pub mod delete_all_genres;
pub mod delete_genre;
pub mod get_genre;
pub mod get_genres;
pub mod update_genre;
