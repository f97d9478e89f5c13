// Copyright © 2024 Stephan Kunz

//! Module `clock` provides the time sources a `Chronometer` reads from.
//!
//! A [`Clock`] reports a monotonic reading relative to its own origin.
//! [`MonotonicClock`] follows the tokio clock, so a paused tokio runtime
//! drives it as well, [`ManualClock`] only moves when told to.

// region:		--- modules
use core::{fmt::Debug, time::Duration};
use std::sync::{
	atomic::{AtomicU64, Ordering},
	Arc,
};
// endregion:	--- modules

// region:		--- Clock
/// A monotonic time source
pub trait Clock: Debug + Send + Sync {
	/// Time passed since the clocks origin
	fn now(&self) -> Duration;
}
// endregion:	--- Clock

// region:		--- MonotonicClock
/// The default [`Clock`], backed by [`tokio::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
	origin: tokio::time::Instant,
}

impl Default for MonotonicClock {
	fn default() -> Self {
		Self::new()
	}
}

impl MonotonicClock {
	/// Constructor for a [`MonotonicClock`] with origin now
	#[must_use]
	pub fn new() -> Self {
		Self {
			origin: tokio::time::Instant::now(),
		}
	}
}

impl Clock for MonotonicClock {
	fn now(&self) -> Duration {
		self.origin.elapsed()
	}
}
// endregion:	--- MonotonicClock

// region:		--- ManualClock
/// A [`Clock`] that is moved explicitly.
/// Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
	nanos: Arc<AtomicU64>,
}

impl ManualClock {
	/// Constructor for a [`ManualClock`] reading zero
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Move the clock forward by `delta`, saturating at the maximum reading
	pub fn advance(&self, delta: Duration) {
		let delta = to_nanos(delta);
		// the closure never returns `None`, so the update always succeeds
		let _ = self
			.nanos
			.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |nanos| {
				Some(nanos.saturating_add(delta))
			});
	}

	/// Set the clock to `reading`.
	/// Going backwards breaks the monotony a `Chronometer` expects.
	pub fn set(&self, reading: Duration) {
		self.nanos.store(to_nanos(reading), Ordering::SeqCst);
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Duration {
		Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
	}
}

/// saturates at roughly 584 years
fn to_nanos(duration: Duration) -> u64 {
	u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
// endregion:	--- ManualClock

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<MonotonicClock>();
		is_normal::<ManualClock>();
	}

	#[test]
	fn manual_clock_is_shared() {
		let clock = ManualClock::new();
		let other = clock.clone();
		assert_eq!(clock.now(), Duration::ZERO);
		other.advance(Duration::from_millis(250));
		assert_eq!(clock.now(), Duration::from_millis(250));
		clock.set(Duration::from_secs(3));
		assert_eq!(other.now(), Duration::from_secs(3));
	}

	#[test]
	fn manual_clock_saturates() {
		let clock = ManualClock::new();
		clock.set(Duration::from_secs(u64::MAX));
		let max = clock.now();
		clock.advance(Duration::from_secs(1));
		assert_eq!(clock.now(), max);
		assert_eq!(max, Duration::from_nanos(u64::MAX));
	}

	#[tokio::test(start_paused = true)]
	async fn monotonic_clock_follows_tokio_time() {
		let clock = MonotonicClock::new();
		assert_eq!(clock.now(), Duration::ZERO);
		tokio::time::sleep(Duration::from_millis(1500)).await;
		assert_eq!(clock.now(), Duration::from_millis(1500));
	}
}
