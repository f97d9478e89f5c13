// Copyright © 2024 Stephan Kunz

//! The configuration data.
//!
//! The configuration can be defined using json5 formated files.
//!
//! # Examples
//! ```rust,no_run
//! # use chronos_config::Config;
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
//! // the built-in defaults
//! let config = Config::default();
//!
//! // create a configuration from a file named `chronos.json5`
//! // located in one of the directories listed below.
//! // If that file does not exist or is invalid, the defaults are used
//! let config = Config::load();
//!
//! // use file named `filename.json5`
//! // returns an error if file does not exist or is no valid configuration file
//! let config = Config::from_file("filename.json5")?;
//!
//! // parse a configuration given as string
//! let config = Config::from_json5("{ timer: { poll_interval_ms: 100 } }")?;
//! # Ok(())
//! # }
//! ```
//!
//! The methods using files will search in following directories for the file (order first to last):
//!  - current working directory
//!  - `.config` directory below current working directory
//!  - `.config/chronos` directory below home directory
//!  - local config directory (`Linux`: `$XDG_CONFIG_HOME/chronos` or `$HOME/.config/chronos` | `Windows`: `{FOLDERID_LocalAppData}/chronos` | `MacOS`: `$HOME/Library/Application Support/chronos`)
//!  - config directory (`Linux`: `$XDG_CONFIG_HOME/chronos` or `$HOME/.config/chronos` | `Windows`: `{FOLDERID_RoamingAppData}/chronos` | `MacOS`: `$HOME/Library/Application Support/chronos`)
//!

// region:		--- modules
mod config;
mod error;
mod utils;

// flatten
pub use config::*;
pub use error::Error;
pub use utils::find_config_file;
// endregion:	--- modules

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;
// endregion:	--- types
