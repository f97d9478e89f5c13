// Copyright © 2024 Stephan Kunz

//! Module `timer_builder` provides the [`TimerBuilder`] to create a [`Timer`].

// region:		--- modules
use super::timer::{Timer, TimerCallback};
use crate::Chronometer;
use chronos_config::TimerConfig;
use chronos_core::{Clock, Error, MonotonicClock, Result};
use core::time::Duration;
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
// endregion:	--- modules

// region:		--- constants
/// Interval in which a running [`Timer`] checks for expiry, if nothing else is set
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);
// endregion:	--- constants

// region:		--- TimerBuilder
/// A builder for a timer
#[allow(clippy::module_name_repetitions)]
#[derive(Clone)]
pub struct TimerBuilder {
	duration: Duration,
	poll_interval: Duration,
	callback: Option<TimerCallback>,
	clock: Option<Arc<dyn Clock>>,
	runtime: Option<Handle>,
}

impl TimerBuilder {
	/// Construct a `TimerBuilder` for a countdown of `duration`
	#[must_use]
	pub const fn new(duration: Duration) -> Self {
		Self {
			duration,
			poll_interval: DEFAULT_POLL_INTERVAL,
			callback: None,
			clock: None,
			runtime: None,
		}
	}

	/// Set the function called on expiry
	#[must_use]
	pub fn callback<F>(mut self, callback: F) -> Self
	where
		F: FnMut() -> Result<()> + Send + 'static,
	{
		self.callback.replace(Arc::new(Mutex::new(callback)));
		self
	}

	/// Set the interval in which the running timer checks for expiry
	#[must_use]
	pub const fn poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = interval;
		self
	}

	/// Take the settings from a [`TimerConfig`]
	#[must_use]
	pub const fn config(self, config: &TimerConfig) -> Self {
		self.poll_interval(config.poll_interval())
	}

	/// Set the time source, default is a [`MonotonicClock`]
	#[must_use]
	pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock.replace(clock);
		self
	}

	/// Set the runtime the polling task is spawned on.
	/// Without, the timer must be started from within a tokio runtime.
	#[must_use]
	pub fn runtime(mut self, runtime: Handle) -> Self {
		self.runtime.replace(runtime);
		self
	}

	/// Build the timer
	/// # Errors
	/// if duration or polling interval are zero
	pub fn build(self) -> Result<Timer> {
		if self.duration.is_zero() {
			return Err(Error::InvalidDuration(self.duration).into());
		}
		if self.poll_interval.is_zero() {
			return Err(Error::InvalidPollInterval(self.poll_interval).into());
		}
		let clock = self
			.clock
			.unwrap_or_else(|| Arc::new(MonotonicClock::new()));
		Ok(Timer::from_parts(
			self.duration,
			self.poll_interval,
			self.callback,
			self.runtime,
			Chronometer::with_clock(clock),
		))
	}
}
// endregion:	--- TimerBuilder

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<TimerBuilder>();
	}

	#[test]
	fn build_defaults() -> Result<()> {
		let timer = TimerBuilder::new(Duration::from_secs(30)).build()?;
		assert_eq!(timer.duration(), Duration::from_secs(30));
		assert_eq!(timer.poll_interval(), DEFAULT_POLL_INTERVAL);
		assert_eq!(timer.time_left(), Duration::from_secs(30));
		assert!(!timer.is_running());
		assert!(!timer.is_expired());
		Ok(())
	}

	#[test]
	fn build_rejects_zero_duration() {
		let result = TimerBuilder::new(Duration::ZERO).build();
		assert!(result.is_err_and(|err| matches!(
			err.downcast_ref::<Error>(),
			Some(Error::InvalidDuration(_))
		)));
	}

	#[test]
	fn build_rejects_zero_poll_interval() {
		let result = TimerBuilder::new(Duration::from_secs(1))
			.poll_interval(Duration::ZERO)
			.build();
		assert!(result.is_err_and(|err| matches!(
			err.downcast_ref::<Error>(),
			Some(Error::InvalidPollInterval(_))
		)));
	}

	#[test]
	fn build_from_config() -> Result<()> {
		let config = TimerConfig {
			poll_interval_ms: 20,
		};
		let timer = TimerBuilder::new(Duration::from_secs(1))
			.config(&config)
			.build()?;
		assert_eq!(timer.poll_interval(), Duration::from_millis(20));
		Ok(())
	}
}
