// Copyright © 2024 Stephan Kunz
#![crate_type = "lib"]
#![crate_name = "chronos"]
#![warn(missing_docs)]

//! Library implements time measuring things:
//! a [`Chronometer`], a countdown [`Timer`] and [`instrument`]ed calls.

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// region:    --- modules
/// Chronometer
pub mod chronometer;
/// Measuring calls
pub mod instrument;
/// Public interface of chronos.
/// Typically it is sufficient to include the prelude with
/// `use chronos::prelude::*;`
pub mod prelude;
/// Countdown timer
pub mod timer;

// flatten
pub use chronometer::{Chronometer, ChronometerGuard};
pub use instrument::{instrument, CallKind, InstrumentOptions, Instrumented};
pub use timer::{Timer, TimerBuilder, TimerCallback, TimerGuard, DEFAULT_POLL_INTERVAL};
// endregion: --- modules
