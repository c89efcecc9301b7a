pub mod change_password;
pub mod create_user;
pub mod delete_all_users;
pub mod delete_user;
pub mod get_user;
pub mod get_users;
pub mod update_avatar;
pub mod update_user;
