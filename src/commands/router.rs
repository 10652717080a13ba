//! Inbound message routing
//!
//! Parses prefixed text commands out of gateway messages, applies the
//! per-user rate limit, and dispatches to the registered handler.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.5.0
//!
//! ## Changelog
//! - 1.1.0: Per-user rate limiting before dispatch
//! - 1.0.0: Extracted from the event handler

use anyhow::Result;
use log::{debug, info, warn};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::registry::CommandRegistry;
use crate::features::rate_limiting::RateLimiter;

/// Commands allowed per user within the rate-limit window.
const RATE_LIMIT_MAX: usize = 10;
/// Rate-limit window length.
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

pub struct CommandRouter {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
    rate_limiter: RateLimiter,
}

impl CommandRouter {
    pub fn new(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        Self {
            context: Arc::new(context),
            registry,
            rate_limiter: RateLimiter::new(RATE_LIMIT_MAX, RATE_LIMIT_WINDOW),
        }
    }

    /// Route one inbound message.
    ///
    /// Non-command messages and unknown commands are ignored; handler
    /// errors propagate to the event handler for the generic apology
    /// reply.
    pub async fn handle_message(&self, ctx: &Context, msg: &Message) -> Result<()> {
        let (name, args) = match parse_command(&msg.content, &self.context.command_prefix) {
            Some(parsed) => parsed,
            None => return Ok(()),
        };

        let request_id = Uuid::new_v4();
        let user_id = msg.author.id.to_string();
        info!("[{request_id}] 📥 Command '{name}' from user {user_id} with {} arg(s)", args.len());

        if !self.rate_limiter.check(&user_id) {
            warn!("[{request_id}] 🚫 Rate limit exceeded for user {user_id}");
            msg.channel_id
                .say(
                    &ctx.http,
                    "🚫 Slow down — too many commands. Try again in a minute.",
                )
                .await?;
            return Ok(());
        }

        match self.registry.get(name) {
            Some(handler) => handler.handle(Arc::clone(&self.context), ctx, msg, &args).await,
            None => {
                debug!("[{request_id}] Unknown command '{name}', ignoring");
                Ok(())
            }
        }
    }
}

/// Split a prefixed command message into its name and argument tokens.
///
/// Returns None for messages that don't start with the prefix or have
/// nothing after it.
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, Vec<&'a str>)> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}
