// Copyright © 2024 Stephan Kunz

//! The `chronos` specific error enum `Error` together with a type alias for [`std::result::Result`] to write only `Result<T>`.
//!

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;
// endregion:	--- types

// region:		--- Error
/// `chronos` error type.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// A timer was started outside of a tokio runtime
	#[error("no tokio runtime available to spawn the polling task")]
	NoRuntime,
	/// A countdown needs a duration greater than zero
	#[error("invalid countdown duration {0:?}, must be greater than zero")]
	InvalidDuration(std::time::Duration),
	/// The polling interval must be greater than zero
	#[error("invalid polling interval {0:?}, must be greater than zero")]
	InvalidPollInterval(std::time::Duration),
}
// endregion:	--- Error
