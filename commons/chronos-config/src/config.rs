// Copyright © 2024 Stephan Kunz

// region:		--- modules
use crate::{utils::find_config_file, Error, Result};
use core::time::Duration;
use tracing::{debug, error, info, warn};
// endregion:	--- modules

// region:		--- constants
/// Name of the file [`Config::load`] looks for
pub const DEFAULT_CONFIG_FILE: &str = "chronos.json5";
/// Default polling interval of a running timer in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;
// endregion:	--- constants

// region:		--- TimerConfig
/// Settings for timers
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
	/// Interval in milliseconds in which a running timer checks for expiry
	pub poll_interval_ms: u64,
}

impl Default for TimerConfig {
	fn default() -> Self {
		Self {
			poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
		}
	}
}

impl TimerConfig {
	/// The polling interval as [`Duration`]
	#[must_use]
	pub const fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms)
	}
}
// endregion:	--- TimerConfig

// region:		--- InstrumentConfig
/// Settings for instrumented calls
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstrumentConfig {
	/// Report the running total of all measured calls
	pub print_sum: bool,
}
// endregion:	--- InstrumentConfig

// region:		--- Config
/// Manages the configuration.
/// [`Config::default`] holds the built-in defaults without reading any file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	timer: TimerConfig,
	instrument: InstrumentConfig,
}

impl Config {
	/// Load the configuration<br>
	/// Will search for a configuration file with name `chronos.json5` in the directories mentioned in [`Examples`](index.html#examples).<br>
	/// If no usable file is found, the built-in defaults are used.
	#[must_use]
	pub fn load() -> Self {
		match find_config_file(DEFAULT_CONFIG_FILE) {
			Ok(path) => {
				info!("trying file {:?}", &path);
				match Self::read(&path) {
					Ok(config) => config,
					Err(error) => {
						error!("{}", error);
						warn!("using default configuration instead");
						Self::default()
					}
				}
			}
			Err(error) => {
				debug!("{}", error);
				Self::default()
			}
		}
	}

	/// Create a configuration based on file with given filename.<br>
	/// Will search in the directories mentioned in [`Examples`](index.html#examples).<br>
	///
	/// # Errors
	/// Returns a [`std::io::Error`], if file does not exist in any of the places or is not accessible,
	/// a parse error, if the content is no valid configuration.
	pub fn from_file(filename: &str) -> Result<Self> {
		let path = find_config_file(filename)?;
		info!("using file {:?}", &path);
		Self::read(&path)
	}

	/// Create a configuration from a json5 formatted string.
	///
	/// # Errors
	/// Returns a parse error, if the content is no valid configuration.
	pub fn from_json5(content: &str) -> Result<Self> {
		Self::parse("<string>", content)
	}

	fn read(path: &std::path::Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::parse(&path.to_string_lossy(), &content)
	}

	fn parse(origin: &str, content: &str) -> Result<Self> {
		let cfg: Self = json5::from_str(content)?;
		if cfg.timer.poll_interval_ms == 0 {
			return Err(Error::InvalidPollInterval(0, origin.into()).into());
		}
		Ok(cfg)
	}

	/// Access the timer settings
	#[must_use]
	pub const fn timer(&self) -> &TimerConfig {
		&self.timer
	}

	/// Access the instrumentation settings
	#[must_use]
	pub const fn instrument(&self) -> &InstrumentConfig {
		&self.instrument
	}
}
// endregion:	--- Config
