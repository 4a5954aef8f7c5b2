//! Guild event handler.
//!
//! `guild_create` fires for every guild on startup and again whenever the bot joins
//! a guild. Startup guilds are already covered by the reconciliation pass in the
//! ready handler, so only newly joined guilds are reconciled here.

use serenity::all::{Context, Guild};

use crate::server::{
    bot::handler::gateway,
    model::verification::ReconcileOutcome,
    service::{presence::PresenceService, settings::SettingsStore, verification::VerificationService},
};

/// Handles the guild_create event.
///
/// # Arguments
/// - `settings` - Shared runtime settings
/// - `presence` - Bot connection state, providing the bot user id
/// - `ctx` - Discord context for API access
/// - `guild` - The guild that became available
/// - `is_new` - `Some(true)` when the bot just joined this guild
pub async fn handle_guild_create(
    settings: &SettingsStore,
    presence: &PresenceService,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - is_new: {:?}",
        guild.name,
        guild.id,
        is_new
    );

    if is_new != Some(true) {
        return;
    }

    let Some(bot) = presence.identity().await else {
        tracing::warn!("Joined guild {} before ready, skipping reconciliation", guild.name);
        return;
    };

    tracing::info!("Joined guild {} ({})", guild.name, guild.id);

    let settings = settings.snapshot().await;
    let gateway = gateway(&ctx);

    match VerificationService::new(&gateway)
        .reconcile(guild.id, bot.user_id, &settings)
        .await
    {
        Ok(ReconcileOutcome::Posted {
            channel_id,
            message_id,
            ..
        }) => tracing::debug!(
            "Verification prompt {} posted in channel {} of {}",
            message_id,
            channel_id,
            guild.name
        ),
        Ok(ReconcileOutcome::NoVerifyChannel) => {}
        Err(e) => tracing::error!("Failed to reconcile new guild {}: {}", guild.name, e),
    }
}
