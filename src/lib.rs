//! Recognition of alphabet letters from hand landmarks.
//!
//! This crate turns the 21 hand landmarks reported by a MediaPipe-style hand landmark detector into
//! a letter. It does not detect hands or landmarks itself.
//!
//! Recognition happens in two steps:
//!
//! 1. [`HandPose::from_landmarks`] decides for each finger whether it is extended, by comparing the
//!    Y coordinate of its tip against a lower joint.
//! 2. A [`RuleTable`] maps the resulting five finger states to a [`Letter`]. The built-in table is
//!    [`alphabet::ARABIC`].
//!
//! [`recognize`] wraps both steps and accepts the raw per-frame detector output.
//!
//! # Coordinates
//!
//! Landmark coordinates are image coordinates: X points to the right, Y points *down*. A finger
//! pointing up therefore has a tip with a *smaller* Y coordinate than its joints.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log levels set up by [`init_logger!`].
//!
//! [`HandPose::from_landmarks`]: hand::finger::HandPose::from_landmarks
//! [`RuleTable`]: alphabet::RuleTable
//! [`Letter`]: alphabet::Letter
//! [`recognize`]: recognizer::recognize

use log::LevelFilter;

pub mod alphabet;
pub mod filter;
pub mod hand;
pub mod landmark;
pub mod recognizer;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate will log at *debug* level. Per-finger states are logged at
/// *trace* level and can be enabled via `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
