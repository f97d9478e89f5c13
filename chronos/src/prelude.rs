// Copyright © 2024 Stephan Kunz

// region:    --- modules
pub use crate::chronometer::Chronometer;
pub use crate::instrument::{instrument, CallKind, InstrumentOptions};
pub use crate::timer::{Timer, TimerBuilder};
pub use chronos_config::Config;
pub use chronos_core::{Clock, Error, ManualClock, MonotonicClock, Result};
// endregion:  --- modules
