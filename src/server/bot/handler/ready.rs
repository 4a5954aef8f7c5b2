//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! records the bot identity, sets the bot's activity and reconciles every guild so
//! each verify channel carries a fresh prompt.

use serenity::all::{ActivityData, Context, Ready};

use crate::server::{
    bot::handler::gateway,
    service::{presence::PresenceService, settings::SettingsStore, verification::VerificationService},
};

/// Handles the ready event when the bot connects to Discord.
///
/// This event fires once per gateway session, including after a reconnect that
/// could not be resumed, so prompts are refreshed whenever the bot comes back.
///
/// # Arguments
/// - `settings` - Shared runtime settings
/// - `presence` - Bot connection state to mark as ready
/// - `ctx` - Discord context for setting activity and API access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    settings: &SettingsStore,
    presence: &PresenceService,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord ({} guild(s))",
        ready.user.name,
        ready.guilds.len()
    );

    presence
        .mark_ready(ready.user.id, ready.user.name.clone())
        .await;

    let settings = settings.snapshot().await;

    ctx.set_activity(Some(ActivityData::watching(format!(
        "#{}",
        settings.verify_channel_name
    ))));

    let gateway = gateway(&ctx);
    let reconciled = VerificationService::new(&gateway)
        .reconcile_all(ready.user.id, &settings)
        .await;

    tracing::info!("Reconciled {} guild(s) on ready", reconciled);
}
