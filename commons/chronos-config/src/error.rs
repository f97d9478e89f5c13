// Copyright © 2024 Stephan Kunz

//! `chronos-config` errors

use thiserror::Error;

// region:		--- Error
/// `chronos-config` error type.
#[derive(Error, Debug)]
pub enum Error {
	/// a zero polling interval would spin
	#[error("invalid 'poll_interval_ms' of {0} in {1}")]
	InvalidPollInterval(u64, String),
}
// endregion:	--- Error
