use std::path::{Path, PathBuf};

pub const IMAGE_STORAGE: &str = "public/images";
pub const SOUND_STORAGE: &str = "public/sounds";

// Shared placeholder, referenced by every row without an uploaded avatar.
// Never deleted by asset cleanup.
pub const DEFAULT_AVATAR: &str = "public/images/default.png";

#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub ip: String,
	pub port: String,
	pub jwt_secret: String,
	pub asset_root: PathBuf,
	pub allowed_origins: Vec<String>,
}

impl Config {
	pub fn from_env() -> Config {
		Config {
			database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file"),
			ip: std::env::var("BIND_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
			port: std::env::var("BIND_PORT").unwrap_or_else(|_| "8080".to_string()),
			jwt_secret: std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set in .env file"),
			asset_root: std::env::var("ASSET_ROOT").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(".")),
			allowed_origins: std::env::var("ALLOWED_ORIGINS")
				.unwrap_or_else(|_| "http://localhost:5173".to_string())
				.split(',')
				.map(|origin| origin.trim().to_string())
				.filter(|origin| !origin.is_empty())
				.collect(),
		}
	}

	/// Resolves a stored asset path ("public/images/xyz.png") against the asset root.
	pub fn asset_path(&self, stored: &str) -> PathBuf {
		self.asset_root.join(Path::new(stored))
	}
}
