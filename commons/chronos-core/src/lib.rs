// Copyright © 2024 Stephan Kunz

//! Core of `chronos`

/// Time sources
pub mod clock;
/// Error handling
pub mod error;

// flatten
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{Error, Result};
