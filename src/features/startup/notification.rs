//! Startup notification to the alert channel.
//!
//! Sent at most once per process, on the first gateway Ready event;
//! reconnects are skipped. Enabled via the STARTUP_NOTIFICATION flag.

use log::{info, warn};
use serenity::builder::CreateEmbed;
use serenity::http::Http;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::utils::Color;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::features::{get_bot_version, get_features};

/// Tracks whether this is the first Ready event (vs reconnect)
static FIRST_READY: AtomicBool = AtomicBool::new(true);

pub struct StartupNotifier {
    enabled: bool,
    channel: ChannelId,
}

impl StartupNotifier {
    pub fn new(enabled: bool, channel: ChannelId) -> Self {
        Self { enabled, channel }
    }

    /// Send the startup notification if enabled and this is the first Ready.
    pub async fn send_if_enabled(&self, http: &Http, ready: &Ready) {
        if !FIRST_READY.swap(false, Ordering::SeqCst) {
            info!("Skipping startup notification (reconnect, not initial startup)");
            return;
        }

        if !self.enabled {
            info!("Startup notifications disabled");
            return;
        }

        let embed = Self::build_embed(ready);
        match self.channel.send_message(http, |m| m.set_embed(embed)).await {
            Ok(_) => info!("Sent startup notification to channel {}", self.channel),
            Err(e) => warn!(
                "Failed to send startup notification to channel {}: {e}",
                self.channel
            ),
        }
    }

    fn build_embed(ready: &Ready) -> CreateEmbed {
        let mut embed = CreateEmbed::default();

        embed
            .title(format!("{} is Online!", ready.user.name))
            .color(Color::from_rgb(87, 242, 135)); // Discord green

        embed.field("Version", format!("`v{}`", get_bot_version()), true);
        embed.field("Guilds", ready.guilds.len().to_string(), true);
        embed.field("Features", format_feature_list(), false);

        if let Some(url) = ready.user.avatar_url() {
            embed.thumbnail(url);
        }

        embed
    }
}

/// One line per feature with its version.
fn format_feature_list() -> String {
    get_features()
        .iter()
        .map(|f| format!("{} `{}`", f.name, f.version))
        .collect::<Vec<_>>()
        .join("\n")
}
