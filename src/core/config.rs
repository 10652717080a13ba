//! Environment-driven bot configuration
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add STARTUP_NOTIFICATION flag
//! - 1.1.0: Make the sweep time configurable via SWEEP_UTC_TIME
//! - 1.0.0: Initial creation (token, alert channel, prefix, log level)

use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use std::env;

/// Fallback sweep time when SWEEP_UTC_TIME is not set.
pub const DEFAULT_SWEEP_TIME: &str = "09:00";

/// Runtime configuration, read once at startup.
///
/// `DISCORD_TOKEN` and `ALERT_CHANNEL_ID` are required; everything else
/// has a default. Missing or malformed required values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token for the Discord gateway
    pub discord_token: String,
    /// Channel that receives sweep alerts (and the startup notification)
    pub alert_channel_id: u64,
    /// Prefix for inbound text commands, e.g. `!`
    pub command_prefix: String,
    /// Daily wall-clock sweep time, interpreted in UTC
    pub sweep_time: NaiveTime,
    /// Default env_logger filter when RUST_LOG is not set
    pub log_level: String,
    /// Whether to announce the bot in the alert channel on first Ready
    pub startup_notification: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let discord_token =
            env::var("DISCORD_TOKEN").map_err(|_| anyhow!("DISCORD_TOKEN is not set"))?;

        let alert_channel_id = env::var("ALERT_CHANNEL_ID")
            .map_err(|_| anyhow!("ALERT_CHANNEL_ID is not set"))?;
        let alert_channel_id = parse_channel_id(&alert_channel_id)?;

        let command_prefix = env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string());

        let sweep_time = env::var("SWEEP_UTC_TIME")
            .unwrap_or_else(|_| DEFAULT_SWEEP_TIME.to_string());
        let sweep_time = parse_sweep_time(&sweep_time)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let startup_notification = env::var("STARTUP_NOTIFICATION")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Config {
            discord_token,
            alert_channel_id,
            command_prefix,
            sweep_time,
            log_level,
            startup_notification,
        })
    }
}

/// Parse a numeric Discord channel id.
fn parse_channel_id(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| anyhow!("ALERT_CHANNEL_ID must be a numeric channel id, got '{value}'"))
}

/// Parse an `HH:MM` wall-clock time.
fn parse_sweep_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| anyhow!("SWEEP_UTC_TIME must be HH:MM (24h), got '{value}'"))
}

/// Accepts the usual spellings of an enabled flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_channel_id_valid() {
        assert_eq!(parse_channel_id("123456789012345678").unwrap(), 123456789012345678);
        assert_eq!(parse_channel_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_channel_id_invalid() {
        assert!(parse_channel_id("#general").is_err());
        assert!(parse_channel_id("").is_err());
        assert!(parse_channel_id("-5").is_err());
    }

    #[test]
    fn test_parse_sweep_time_valid() {
        let t = parse_sweep_time("09:00").unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 0));

        let t = parse_sweep_time("23:45").unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 45));
    }

    #[test]
    fn test_parse_sweep_time_invalid() {
        assert!(parse_sweep_time("9am").is_err());
        assert!(parse_sweep_time("25:00").is_err());
        assert!(parse_sweep_time("09:60").is_err());
        assert!(parse_sweep_time("").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("Enabled"));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("disabled"));
        assert!(!parse_flag(""));
    }
}
