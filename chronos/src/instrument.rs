// Copyright © 2024 Stephan Kunz

//! Module `instrument` measures how long calls take.
//!
//! A function wrapped with [`instrument`] is timed on every invocation, the
//! measured time is reported via `tracing` at info level.
//! Arguments are passed as a single value, use a tuple for several arguments
//! and pass the receiver explicitly for methods.
//!
//! # Examples
//! ```rust
//! # use chronos::{instrument, CallKind, InstrumentOptions};
//! let mut add = instrument("add", InstrumentOptions::default(), |(a, b): (u32, u32)| a + b);
//! assert_eq!(add.call((1, 2)), 3);
//!
//! struct Counter(u32);
//! let options = InstrumentOptions {
//!     kind: CallKind::Method,
//!     print_sum: true,
//! };
//! let mut incr = instrument("incr", options, |counter: &mut Counter| counter.0 += 1);
//! let mut counter = Counter(0);
//! for _ in 0..3 {
//!     incr.call(&mut counter);
//! }
//! assert_eq!(counter.0, 3);
//! assert_eq!(incr.calls(), 3);
//! ```

// region:		--- modules
use crate::Chronometer;
use chronos_config::InstrumentConfig;
use chronos_core::Clock;
use core::{fmt::Display, time::Duration};
use std::sync::Arc;
use tracing::info;
// endregion:	--- modules

// region:		--- CallKind
/// What kind of callable is measured, only affects the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallKind {
	/// A free function or closure
	#[default]
	Function,
	/// A method, the receiver is part of the arguments
	Method,
}

impl Display for CallKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Function => write!(f, "Function"),
			Self::Method => write!(f, "Method"),
		}
	}
}
// endregion:	--- CallKind

// region:		--- InstrumentOptions
/// Options for an [`Instrumented`] callable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstrumentOptions {
	/// Kind of the measured callable
	pub kind: CallKind,
	/// Report the running total of all calls
	pub print_sum: bool,
}

impl From<&InstrumentConfig> for InstrumentOptions {
	fn from(config: &InstrumentConfig) -> Self {
		Self {
			kind: CallKind::Function,
			print_sum: config.print_sum,
		}
	}
}
// endregion:	--- InstrumentOptions

// region:		--- Instrumented
/// Wraps `function` so that each call is timed and reported
pub fn instrument<F>(
	name: impl Into<String>,
	options: InstrumentOptions,
	function: F,
) -> Instrumented<F> {
	Instrumented {
		name: name.into(),
		options,
		function,
		chronometer: Chronometer::new(),
		calls: 0,
		last: None,
		total: Duration::ZERO,
	}
}

/// A callable measuring its own calls
#[derive(Debug)]
pub struct Instrumented<F> {
	name: String,
	options: InstrumentOptions,
	function: F,
	chronometer: Chronometer,
	/// number of completed calls
	calls: u64,
	last: Option<Duration>,
	total: Duration,
}

impl<F> Instrumented<F> {
	/// Use the given time source for measuring
	#[must_use]
	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.chronometer = Chronometer::with_clock(clock);
		self
	}

	/// Invoke the wrapped function with `args` and measure the call.
	/// A call that panics is not recorded.
	pub fn call<A, R>(&mut self, args: A) -> R
	where
		F: FnMut(A) -> R,
	{
		// drop leftovers of a call that unwound
		self.chronometer.reset();
		let result = {
			let _running = self.chronometer.scoped();
			(self.function)(args)
		};
		self.register();
		result
	}

	/// Record and report the latest measurement, then reset the chronometer
	fn register(&mut self) {
		let elapsed = self.chronometer.partial();
		self.calls += 1;
		self.last = Some(elapsed);
		self.total += elapsed;
		info!("{}", self.report(elapsed));
		self.chronometer.reset();
	}

	fn report(&self, elapsed: Duration) -> String {
		let mut report = format!(
			"{} {} > Time: {}",
			self.options.kind,
			self.name,
			elapsed.as_secs_f64()
		);
		if self.options.print_sum {
			report.push_str(&format!(" - Total: {}", self.total.as_secs_f64()));
		}
		report
	}

	/// Name used in the reports
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of measured calls
	#[must_use]
	pub const fn calls(&self) -> u64 {
		self.calls
	}

	/// The measured time of the latest call
	#[must_use]
	pub const fn last(&self) -> Option<Duration> {
		self.last
	}

	/// Sum of all measured times
	#[must_use]
	pub const fn total(&self) -> Duration {
		self.total
	}

	/// Turn into a plain closure
	pub fn into_fn<A, R>(mut self) -> impl FnMut(A) -> R
	where
		F: FnMut(A) -> R,
	{
		move |args| self.call(args)
	}
}
// endregion:	--- Instrumented
