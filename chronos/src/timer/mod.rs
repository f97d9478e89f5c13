// Copyright © 2024 Stephan Kunz

//! Module implements the countdown timer.
//!

// region:    --- modules
#[allow(clippy::module_inception)]
mod timer;
mod timer_builder;

// flatten
pub use timer::*;
pub use timer_builder::*;
// endregion: --- modules
