//! Chat command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;

/// Trait for text command handlers.
///
/// Each handler processes one or more command names. Handlers are
/// registered with a [`super::CommandRegistry`] and dispatched by the
/// router based on the first token after the prefix.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl ChatCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         serenity_ctx: &Context,
///         msg: &Message,
///         args: &[&str],
///     ) -> Result<()> {
///         msg.channel_id.say(&serenity_ctx.http, "pong").await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait ChatCommandHandler: Send + Sync {
    /// Command name(s) this handler processes.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command.
    ///
    /// `args` holds the whitespace-split tokens after the command name.
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        msg: &Message,
        args: &[&str],
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait must stay object-safe for registry dispatch
    fn _assert_object_safe(_: &dyn ChatCommandHandler) {}
}
