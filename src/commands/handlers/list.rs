//! List command handler
//!
//! Handles: list
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Chunk long reports across messages
//! - 1.0.0: Initial release

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::core::response::chunk_for_message;
use crate::features::accounts::AccountStore;

/// Handler for the tracked-accounts report.
pub struct ListHandler;

#[async_trait]
impl ChatCommandHandler for ListHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["list"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        _args: &[&str],
    ) -> Result<()> {
        let report = render(&ctx.store, Utc::now().date_naive(), &ctx.command_prefix);
        for chunk in chunk_for_message(&report) {
            msg.channel_id.say(&serenity_ctx.http, chunk).await?;
        }
        Ok(())
    }
}

/// Render the report for every tracked account.
///
/// One line per record: identifier, registration date, and the signed
/// day count to its alert. Past-due records keep appearing; there is
/// no removal path.
fn render(store: &AccountStore, today: NaiveDate, prefix: &str) -> String {
    if store.is_empty() {
        return format!(
            "📋 No accounts tracked yet.\n\nUse `{prefix}register <identifier> <YYYY-MM-DD>` to start tracking."
        );
    }

    let mut report = String::from("📋 **Tracked Accounts**\n\n");
    for record in store.snapshot() {
        report.push_str(&format!(
            "**{}** — registered {} — {}\n",
            record.identifier,
            record.registered_on,
            format_days_until(record.days_until_alert(today))
        ));
    }
    report
}

/// Human-readable form of the signed days-until-alert count.
fn format_days_until(days: i64) -> String {
    match days {
        0 => "alert due today".to_string(),
        1 => "1 day until alert".to_string(),
        -1 => "1 day past alert".to_string(),
        d if d > 0 => format!("{d} days until alert"),
        d => format!("{} days past alert", -d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_list_handler_commands() {
        let handler = ListHandler;
        assert_eq!(handler.command_names(), &["list"]);
    }

    #[test]
    fn test_empty_store_fixed_message() {
        let store = AccountStore::new();
        let report = render(&store, date("2026-01-10"), "!");

        assert!(report.contains("No accounts tracked yet"));
        assert!(report.contains("!register"));
    }

    #[test]
    fn test_days_left_five() {
        let store = AccountStore::new();
        store.upsert("WH123", date("2026-01-01"));

        let report = render(&store, date("2026-01-10"), "!");
        assert!(report.contains("**WH123**"));
        assert!(report.contains("registered 2026-01-01"));
        assert!(report.contains("5 days until alert"));
    }

    #[test]
    fn test_alert_day_reads_due_today() {
        let store = AccountStore::new();
        store.upsert("WH123", date("2026-01-01"));

        let report = render(&store, date("2026-01-15"), "!");
        assert!(report.contains("alert due today"));
    }

    #[test]
    fn test_past_due_record_still_listed() {
        let store = AccountStore::new();
        store.upsert("WH123", date("2026-01-01"));

        let report = render(&store, date("2026-01-18"), "!");
        assert!(report.contains("**WH123**"));
        assert!(report.contains("3 days past alert"));
    }

    #[test]
    fn test_one_line_per_record_sorted() {
        let store = AccountStore::new();
        store.upsert("BETA", date("2026-01-02"));
        store.upsert("ALPHA", date("2026-01-01"));

        let report = render(&store, date("2026-01-10"), "!");
        let alpha = report.find("ALPHA").unwrap();
        let beta = report.find("BETA").unwrap();
        assert!(alpha < beta);
        assert_eq!(report.matches("registered").count(), 2);
    }

    #[test]
    fn test_singular_day_counts() {
        assert_eq!(format_days_until(1), "1 day until alert");
        assert_eq!(format_days_until(-1), "1 day past alert");
        assert_eq!(format_days_until(0), "alert due today");
        assert_eq!(format_days_until(14), "14 days until alert");
        assert_eq!(format_days_until(-6), "6 days past alert");
    }
}
