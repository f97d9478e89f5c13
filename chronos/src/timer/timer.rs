// Copyright © 2024 Stephan Kunz

//! Module `timer` provides the countdown [`Timer`] which can be created using the [`TimerBuilder`](crate::TimerBuilder).
//! When the countdown runs out, a `Timer` calls his assigned [`TimerCallback`] once.

// region:		--- modules
use crate::{Chronometer, TimerBuilder};
use chronos_core::{Error, Result};
use core::{fmt::Debug, ops::Deref, time::Duration};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::{runtime::Handle, task::JoinHandle, time};
use tracing::{debug, error, info, instrument, warn, Level};
// endregion:	--- modules

// region:		--- types
/// type definition for the function called by an expiring timer
#[allow(clippy::module_name_repetitions)]
pub type TimerCallback = Arc<Mutex<dyn FnMut() -> Result<()> + Send + 'static>>;
// endregion:	--- types

// region:		--- TimerState
/// State shared between a [`Timer`] and its polling task
#[derive(Debug)]
pub(crate) struct TimerState {
	pub(crate) chronometer: Chronometer,
	pub(crate) expired: bool,
	/// set while a polling task is alive, cleared by the task itself
	pub(crate) polling: bool,
}

/// Lock a Mutex, recovering from poisoning
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| {
		warn!("found poisoned Mutex");
		mutex.clear_poison();
		poisoned.into_inner()
	})
}
// endregion:	--- TimerState

// region:		--- Timer
/// A countdown on top of a [`Chronometer`] with an optional callback fired on expiry
pub struct Timer {
	/// Length of the countdown
	duration: Duration,
	/// Interval in which the polling task checks for expiry
	poll_interval: Duration,
	/// Called once, when the countdown runs out
	callback: Option<TimerCallback>,
	/// Runtime to spawn the polling task on, the current one if `None`
	runtime: Option<Handle>,
	/// Chronometer and flags
	state: Arc<Mutex<TimerState>>,
	/// The handle of the latest polling task
	handle: Mutex<Option<JoinHandle<()>>>,
}

impl Debug for Timer {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Timer")
			.field("duration", &self.duration)
			.field("poll_interval", &self.poll_interval)
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

impl Drop for Timer {
	fn drop(&mut self) {
		if let Some(handle) = lock(&self.handle).take() {
			handle.abort();
		}
	}
}

impl Timer {
	/// Create a [`TimerBuilder`] for a countdown of `duration`
	#[must_use]
	pub fn builder(duration: Duration) -> TimerBuilder {
		TimerBuilder::new(duration)
	}

	/// Constructor for a [`Timer`] without callback
	/// # Errors
	/// if `duration` is zero
	pub fn new(duration: Duration) -> Result<Self> {
		TimerBuilder::new(duration).build()
	}

	/// Constructor for a [`Timer`] calling `callback` on expiry
	/// # Errors
	/// if `duration` is zero
	pub fn with_callback<F>(duration: Duration, callback: F) -> Result<Self>
	where
		F: FnMut() -> Result<()> + Send + 'static,
	{
		TimerBuilder::new(duration).callback(callback).build()
	}

	pub(crate) fn from_parts(
		duration: Duration,
		poll_interval: Duration,
		callback: Option<TimerCallback>,
		runtime: Option<Handle>,
		chronometer: Chronometer,
	) -> Self {
		Self {
			duration,
			poll_interval,
			callback,
			runtime,
			state: Arc::new(Mutex::new(TimerState {
				chronometer,
				expired: false,
				polling: false,
			})),
			handle: Mutex::new(None),
		}
	}

	/// Start or resume the countdown.
	/// An expired timer is reset before, a running timer stays untouched.
	/// # Errors
	/// if there is no tokio runtime to run the polling task on
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn start(&self) -> Result<()> {
		let runtime = match &self.runtime {
			Some(runtime) => runtime.clone(),
			None => Handle::try_current().map_err(|_| Error::NoRuntime)?,
		};

		let mut state = lock(&self.state);
		if state.expired {
			debug!("rearming expired timer");
			state.chronometer.reset();
			state.expired = false;
		}
		state.chronometer.start();

		if !state.polling {
			state.polling = true;
			let poller = runtime.spawn(run_countdown(
				self.state.clone(),
				self.callback.clone(),
				self.duration,
				self.poll_interval,
			));
			lock(&self.handle).replace(poller);
		}
		drop(state);
		Ok(())
	}

	/// Pause the countdown.
	/// The polling task ends on its next wake up.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn stop(&self) {
		lock(&self.state).chronometer.stop();
	}

	/// Stop the countdown and restore the full duration
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn reset(&self) {
		let mut state = lock(&self.state);
		state.chronometer.reset();
		state.expired = false;
	}

	/// Remaining time of the countdown, never below zero
	#[must_use]
	pub fn time_left(&self) -> Duration {
		self.duration.saturating_sub(self.partial())
	}

	/// Time counted down so far
	#[must_use]
	pub fn partial(&self) -> Duration {
		lock(&self.state).chronometer.partial()
	}

	/// Whether the countdown is running
	#[must_use]
	pub fn is_running(&self) -> bool {
		lock(&self.state).chronometer.is_running()
	}

	/// Whether the countdown ran out and the timer was not reset since
	#[must_use]
	pub fn is_expired(&self) -> bool {
		lock(&self.state).expired
	}

	/// Length of the countdown
	#[must_use]
	pub const fn duration(&self) -> Duration {
		self.duration
	}

	/// Interval in which a running timer checks for expiry
	#[must_use]
	pub const fn poll_interval(&self) -> Duration {
		self.poll_interval
	}

	/// An independent, stopped copy of this timer without callback.
	/// Elapsed time and expired flag are taken over.
	#[must_use]
	pub fn snapshot(&self) -> Self {
		let state = lock(&self.state);
		let mut chronometer = state.chronometer.clone();
		chronometer.stop();
		let copy = Self::from_parts(
			self.duration,
			self.poll_interval,
			None,
			self.runtime.clone(),
			chronometer,
		);
		lock(&copy.state).expired = state.expired;
		drop(state);
		copy
	}

	/// Runs the countdown for the lifetime of the returned guard.
	/// Dropping the guard stops the timer.
	/// # Errors
	/// if there is no tokio runtime to run the polling task on
	pub fn scoped(&self) -> Result<TimerGuard<'_>> {
		self.start()?;
		Ok(TimerGuard { timer: self })
	}
}

#[instrument(name = "countdown", level = Level::ERROR, skip_all)]
async fn run_countdown(
	state: Arc<Mutex<TimerState>>,
	callback: Option<TimerCallback>,
	duration: Duration,
	poll_interval: Duration,
) {
	loop {
		{
			let mut state = lock(&state);
			if !state.chronometer.is_running() {
				state.polling = false;
				debug!("timer stopped before expiry");
				return;
			}
			if state.chronometer.partial() >= duration {
				state.chronometer.stop();
				state.expired = true;
				state.polling = false;
				break;
			}
		}
		time::sleep(poll_interval).await;
	}

	info!("timer expired after {:?}", duration);
	if let Some(callback) = callback {
		let mut cb = lock(&callback);
		if let Err(error) = cb() {
			error!("callback failed with {error}");
		}
	}
}
// endregion:	--- Timer

// region:		--- TimerGuard
/// Keeps a [`Timer`] running until dropped
#[derive(Debug)]
pub struct TimerGuard<'a> {
	timer: &'a Timer,
}

impl Deref for TimerGuard<'_> {
	type Target = Timer;

	fn deref(&self) -> &Self::Target {
		self.timer
	}
}

impl Drop for TimerGuard<'_> {
	fn drop(&mut self) {
		self.timer.stop();
	}
}
// endregion:	--- TimerGuard
