use crate::config::{Config, DEFAULT_AVATAR};

use colored::*;
use std::fs;
use std::path::Path;

/// Best-effort removal of a stored asset file. Placeholder paths listed in
/// `defaults` are shared across rows and never deleted. Failures are logged
/// and swallowed; the owning row is the source of truth, so file cleanup must
/// never block a deletion.
pub fn remove_asset(root: &Path, stored: &str, defaults: &[&str]) {
	if stored.is_empty() || defaults.contains(&stored) {
		return;
	}

	let full_path = root.join(stored);
	match fs::remove_file(&full_path) {
		Ok(()) => println!("{} {}", "Removed asset".dimmed(), full_path.display()),
		Err(err) => println!(
			"{} {} ({err})",
			"Could not remove asset".yellow(),
			full_path.display()
		),
	}
}

/// Removes every staged avatar/sound path, exempting the shared default avatar.
pub fn remove_files(config: &Config, staged: &[String]) {
	for stored in staged {
		remove_asset(&config.asset_root, stored, &[DEFAULT_AVATAR]);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn removes_an_owned_file() {
		let dir = tempfile::tempdir().unwrap();
		let stored = "public/images/owned.png";
		let full = dir.path().join(stored);
		fs::create_dir_all(full.parent().unwrap()).unwrap();
		fs::write(&full, b"png").unwrap();

		remove_asset(dir.path(), stored, &[DEFAULT_AVATAR]);
		assert!(!full.exists());
	}

	#[test]
	fn never_touches_the_default_placeholder() {
		let dir = tempfile::tempdir().unwrap();
		let full = dir.path().join(DEFAULT_AVATAR);
		fs::create_dir_all(full.parent().unwrap()).unwrap();
		fs::write(&full, b"png").unwrap();

		remove_asset(dir.path(), DEFAULT_AVATAR, &[DEFAULT_AVATAR]);
		assert!(full.exists());
	}

	#[test]
	fn missing_file_is_swallowed() {
		let dir = tempfile::tempdir().unwrap();
		// Nothing to assert beyond "does not panic".
		remove_asset(dir.path(), "public/images/gone.png", &[DEFAULT_AVATAR]);
	}

	#[test]
	fn empty_path_is_ignored() {
		let dir = tempfile::tempdir().unwrap();
		remove_asset(dir.path(), "", &[DEFAULT_AVATAR]);
	}
}
