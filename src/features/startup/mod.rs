//! # Feature: Startup Notification
//!
//! Announces the bot in the alert channel when it comes online.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//! - **Toggleable**: true

pub mod notification;

pub use notification::StartupNotifier;
