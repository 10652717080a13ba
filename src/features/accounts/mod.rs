//! # Feature: Account Tracking
//!
//! In-memory store of tracked accounts and their 14-day alert windows.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Sorted snapshots for stable report output
//! - 1.0.0: Initial release with upsert and maturity selection

pub mod store;

pub use store::{AccountRecord, AccountStore, ALERT_WINDOW_DAYS};
