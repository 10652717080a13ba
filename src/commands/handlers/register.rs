//! Register command handler
//!
//! Handles: register, add
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::ChatCommandHandler;
use crate::features::accounts::{AccountStore, ALERT_WINDOW_DAYS};

/// Handler for registering an account into the tracker.
pub struct RegisterHandler;

#[async_trait]
impl ChatCommandHandler for RegisterHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["register", "add"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        args: &[&str],
    ) -> Result<()> {
        let reply = apply(&ctx.store, &ctx.command_prefix, args);
        msg.channel_id.say(&serenity_ctx.http, reply).await?;
        Ok(())
    }
}

/// Validate the arguments and mutate the store; returns the reply text.
///
/// Exactly two tokens are accepted: an identifier and a YYYY-MM-DD date.
/// Validation failures leave the store untouched.
fn apply(store: &AccountStore, prefix: &str, args: &[&str]) -> String {
    if args.len() != 2 {
        return format!("Usage: `{prefix}register <identifier> <YYYY-MM-DD>`");
    }

    let date = match NaiveDate::parse_from_str(args[1], "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return "❌ Date must be in YYYY-MM-DD format.".to_string(),
    };

    let identifier = args[0].to_uppercase();
    let previous = store.upsert(&identifier, date);
    if let Some(old) = previous {
        debug!("Replaced registration date for {identifier}: {old} -> {date}");
    }
    info!("Tracking {identifier}, registered on {date}");

    format!(
        "✅ Tracking **{identifier}** — registered on {date}. You'll be alerted in {ALERT_WINDOW_DAYS} days."
    )
}
