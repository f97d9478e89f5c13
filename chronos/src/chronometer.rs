// Copyright © 2024 Stephan Kunz

//! Module `chronometer` provides the [`Chronometer`], a stopwatch accumulating
//! running time across start/stop cycles.
//!
//! # Examples
//! ```rust
//! # use chronos::Chronometer;
//! let mut chronometer = Chronometer::new();
//! chronometer.start();
//! // ... measured work
//! chronometer.stop();
//! assert!(!chronometer.is_running());
//!
//! // or scoped, the chronometer stops when the guard goes out of scope
//! {
//!     let running = chronometer.scoped();
//!     assert!(running.is_running());
//! }
//! assert!(!chronometer.is_running());
//! chronometer.reset();
//! ```

// region:		--- modules
use chronos_core::{Clock, MonotonicClock};
use core::{
	fmt::Debug,
	ops::{Deref, DerefMut},
	time::Duration,
};
use std::sync::Arc;
use tracing::trace;
// endregion:	--- modules

// region:		--- Chronometer
/// Stopwatch-like accumulator of elapsed running time
#[derive(Clone)]
pub struct Chronometer {
	/// The time source
	clock: Arc<dyn Clock>,
	/// Whether time is currently counted
	running: bool,
	/// Clock reading of the latest start
	start_mark: Duration,
	/// Time counted in all finished running intervals since last reset
	accumulated: Duration,
}

impl Debug for Chronometer {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Chronometer")
			.field("running", &self.running)
			.field("partial", &self.partial())
			.finish_non_exhaustive()
	}
}

impl Default for Chronometer {
	fn default() -> Self {
		Self::new()
	}
}

impl Chronometer {
	/// Constructor for a stopped [`Chronometer`] using the [`MonotonicClock`]
	#[must_use]
	pub fn new() -> Self {
		Self::with_clock(Arc::new(MonotonicClock::new()))
	}

	/// Constructor for a stopped [`Chronometer`] reading from the given [`Clock`]
	#[must_use]
	pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
		Self {
			clock,
			running: false,
			start_mark: Duration::ZERO,
			accumulated: Duration::ZERO,
		}
	}

	/// Starts the chronometer or resumes after the latest stop.
	/// Starting a running chronometer has no effect.
	pub fn start(&mut self) {
		if self.running {
			return;
		}
		self.running = true;
		self.start_mark = self.clock.now();
		trace!(accumulated = ?self.accumulated, "chronometer started");
	}

	/// Stops the chronometer keeping the current count
	pub fn stop(&mut self) {
		self.stop_with(false);
	}

	/// Stops the chronometer and sets the count back to zero
	pub fn reset(&mut self) {
		self.stop_with(true);
	}

	/// Stops the chronometer.
	/// With `reset` the count is set back to zero, otherwise the current count is kept.
	pub fn stop_with(&mut self, reset: bool) {
		self.accumulated = if reset {
			Duration::ZERO
		} else {
			self.partial()
		};
		self.running = false;
		trace!(accumulated = ?self.accumulated, reset, "chronometer stopped");
	}

	/// The time counted since the last reset
	#[must_use]
	pub fn partial(&self) -> Duration {
		if self.running {
			self.accumulated + self.clock.now().saturating_sub(self.start_mark)
		} else {
			self.accumulated
		}
	}

	/// The time counted since the last reset in seconds
	#[must_use]
	pub fn partial_secs(&self) -> f64 {
		self.partial().as_secs_f64()
	}

	/// Whether the chronometer is counting
	#[must_use]
	pub const fn is_running(&self) -> bool {
		self.running
	}

	/// Starts the chronometer for the lifetime of the returned guard.
	/// Dropping the guard stops the chronometer, also when unwinding.
	pub fn scoped(&mut self) -> ChronometerGuard<'_> {
		self.start();
		ChronometerGuard { chronometer: self }
	}
}
// endregion:	--- Chronometer

// region:		--- ChronometerGuard
/// Keeps a [`Chronometer`] running until dropped
#[derive(Debug)]
pub struct ChronometerGuard<'a> {
	chronometer: &'a mut Chronometer,
}

impl Deref for ChronometerGuard<'_> {
	type Target = Chronometer;

	fn deref(&self) -> &Self::Target {
		self.chronometer
	}
}

impl DerefMut for ChronometerGuard<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.chronometer
	}
}

impl Drop for ChronometerGuard<'_> {
	fn drop(&mut self) {
		self.chronometer.stop();
	}
}
// endregion:	--- ChronometerGuard
