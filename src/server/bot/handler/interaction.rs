//! Verification button handler.
//!
//! Only button presses carrying the verification id are handled. Everything else,
//! including presses in direct messages, is ignored without a reply.

use serenity::all::{
    ComponentInteractionDataKind, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, Interaction,
};

use crate::server::{
    bot::handler::gateway,
    model::{
        member::MemberIdentity,
        verification::{VERIFY_BUTTON_ID, VERIFY_FAILED_REPLY},
    },
    service::{settings::SettingsStore, verification::VerificationService},
};

/// Handles the interaction_create event.
///
/// Replies privately to the presser with the verification outcome.
///
/// # Arguments
/// - `settings` - Shared runtime settings
/// - `ctx` - Discord context for API access
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(
    settings: &SettingsStore,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Component(component) = interaction else {
        return;
    };

    let Some(guild_id) = verification_press_guild(
        &component.data.kind,
        &component.data.custom_id,
        component.guild_id,
    ) else {
        return;
    };

    let settings = settings.snapshot().await;
    let gateway = gateway(&ctx);
    let actor = MemberIdentity::from(&component.user);

    let content = match VerificationService::new(&gateway)
        .verify_member(guild_id, &actor, &settings)
        .await
    {
        Ok(outcome) => outcome.reply_content(&settings.success_message),
        Err(e) => {
            tracing::error!(
                "Failed to verify {} in guild {}: {}",
                actor.username,
                guild_id,
                e
            );
            VERIFY_FAILED_REPLY.to_string()
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!("Failed to reply to verification of {}: {}", actor.username, e);
    }
}

/// Returns the guild of a verification button press, or `None` for any other
/// component interaction or a press outside a guild.
fn verification_press_guild(
    kind: &ComponentInteractionDataKind,
    custom_id: &str,
    guild_id: Option<GuildId>,
) -> Option<GuildId> {
    if !matches!(kind, ComponentInteractionDataKind::Button) || custom_id != VERIFY_BUTTON_ID {
        return None;
    }

    guild_id
}
