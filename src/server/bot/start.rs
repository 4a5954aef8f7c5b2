use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::handler::Handler,
    config::Config,
    data::avatar::AvatarSource,
    error::AppError,
    service::{presence::PresenceService, settings::SettingsStore},
};

/// Builds the Discord client without connecting it.
///
/// The returned client exposes its `http`, `cache` and `shard_manager` handles, which
/// the panel and the shutdown path use while the client runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `settings` - Shared runtime settings
/// - `presence` - Shared bot connection state
/// - `avatars` - Source used to download member avatars for banners
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    settings: SettingsStore,
    presence: PresenceService,
    avatars: Arc<dyn AvatarSource>,
) -> Result<Client, AppError> {
    let handler = Handler::new(settings, presence, avatars);

    let client = Client::builder(&config.bot_token, gateway_intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Gateway intents the handler relies on.
///
/// GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS
}

/// Runs the Discord client until its shards shut down.
///
/// This should be called from within a tokio::spawn task since it only returns
/// once the connection ends.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` - The shards were shut down
/// - `Err(AppError)` - Connecting to or running on the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
