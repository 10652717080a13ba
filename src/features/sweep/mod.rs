//! # Feature: Daily Sweep
//!
//! Scheduled scan that alerts when account windows mature.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Configurable sweep time, embed alerts
//! - 1.1.0: Continue past send failures instead of ending the loop
//! - 1.0.0: Initial release, fixed 09:00 UTC sweep

pub mod scheduler;

pub use scheduler::SweepScheduler;
