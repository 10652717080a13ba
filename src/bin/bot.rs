use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId;
use serenity::prelude::*;
use std::sync::Arc;

use rota::commands::{CommandContext, CommandRouter};
use rota::core::Config;
use rota::features::accounts::AccountStore;
use rota::features::startup::StartupNotifier;
use rota::features::sweep::SweepScheduler;

struct Handler {
    router: Arc<CommandRouter>,
    startup_notifier: StartupNotifier,
}

impl Handler {
    fn new(router: CommandRouter, startup_notifier: StartupNotifier) -> Self {
        Handler {
            router: Arc::new(router),
            startup_notifier,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        if let Err(e) = self.router.handle_message(&ctx, &msg).await {
            error!("Error handling message: {e}");
            if let Err(why) = msg
                .channel_id
                .say(
                    &ctx.http,
                    "Sorry, I encountered an error processing your command.",
                )
                .await
            {
                error!("Failed to send error message: {why}");
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        self.startup_notifier.send_if_enabled(&ctx.http, &ready).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting rota account tracker...");

    let store = AccountStore::new();
    let alert_channel = ChannelId(config.alert_channel_id);

    let router = CommandRouter::new(CommandContext::new(
        store.clone(),
        config.command_prefix.clone(),
    ));
    let startup_notifier = StartupNotifier::new(config.startup_notification, alert_channel);
    let handler = Handler::new(router, startup_notifier);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    // Start the daily sweep scheduler
    let scheduler = SweepScheduler::new(store, alert_channel, config.sweep_time);
    let http = client.cache_and_http.http.clone();
    tokio::spawn(async move {
        scheduler.run(http).await;
    });

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
