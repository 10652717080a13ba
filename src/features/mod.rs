//! # Features
//!
//! All feature modules of the rota bot.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0

pub mod accounts;
pub mod rate_limiting;
pub mod startup;
pub mod sweep;

pub use accounts::{AccountRecord, AccountStore};
pub use rate_limiting::RateLimiter;
pub use startup::StartupNotifier;
pub use sweep::SweepScheduler;

/// Feature metadata shown in the startup notification.
#[derive(Debug, Clone)]
pub struct FeatureInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Bot version from Cargo.toml.
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// All features with their current versions.
pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "accounts",
            version: "1.1.0",
        },
        FeatureInfo {
            name: "sweep",
            version: "1.2.0",
        },
        FeatureInfo {
            name: "rate_limiting",
            version: "1.0.0",
        },
        FeatureInfo {
            name: "startup",
            version: "1.0.0",
        },
    ]
}
