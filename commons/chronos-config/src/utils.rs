// Copyright © 2024 Stephan Kunz

// region:		--- modules
use crate::Result;
use dirs::{config_dir, config_local_dir, home_dir};
use std::{
	env,
	io::{Error, ErrorKind},
	path::PathBuf,
};
// endregion:	--- modules

// region:		--- functions
/// find a config file given by name
/// function will search in following directories for the file (order first to last):
///  - current working directory
///  - `.config` directory below current working directory
///  - `.config/chronos` directory below home directory
///  - local config directory (`Linux`: `$XDG_CONFIG_HOME/chronos` or `$HOME/.config/chronos` | `Windows`: `{FOLDERID_LocalAppData}/chronos` | `MacOS`: `$HOME/Library/Application Support/chronos`)
///  - config directory (`Linux`: `$XDG_CONFIG_HOME/chronos` or `$HOME/.config/chronos` | `Windows`: `{FOLDERID_RoamingAppData}/chronos` | `MacOS`: `$HOME/Library/Application Support/chronos`)
/// # Errors
/// Returns a [`std::io::Error`] of kind `NotFound`, if the file exists in none of the places.
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
	// handle environment path current working directory `CWD`
	if let Ok(cwd) = env::current_dir() {
		let path = cwd.join(filename);
		if path.is_file() {
			return Ok(path);
		}

		let path = cwd.join(".config").join(filename);
		if path.is_file() {
			return Ok(path);
		}
	};

	// handle typical config directories
	let home = home_dir().map(|dir| dir.join(".config"));
	for path in [home, config_local_dir(), config_dir()]
		.into_iter()
		.flatten()
	{
		let file = path.join("chronos").join(filename);
		if file.is_file() {
			return Ok(file);
		}
	}

	Err(Box::new(Error::new(
		ErrorKind::NotFound,
		format!("file {filename} not found"),
	)))
}
// endregion:	--- functions
