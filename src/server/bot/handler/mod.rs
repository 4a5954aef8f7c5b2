use std::sync::Arc;

use serenity::all::{Context, EventHandler, Guild, GuildId, Interaction, Member, Ready, User};
use serenity::async_trait;

use crate::server::{
    data::{avatar::AvatarSource, discord::SerenityGateway},
    service::{presence::PresenceService, settings::SettingsStore},
};

pub mod guild;
pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub settings: SettingsStore,
    pub presence: PresenceService,
    pub avatars: Arc<dyn AvatarSource>,
}

impl Handler {
    pub fn new(
        settings: SettingsStore,
        presence: PresenceService,
        avatars: Arc<dyn AvatarSource>,
    ) -> Self {
        Self {
            settings,
            presence,
            avatars,
        }
    }
}

/// Builds a gateway over the event context's HTTP client and cache.
fn gateway(ctx: &Context) -> SerenityGateway {
    SerenityGateway::new(ctx.http.clone(), ctx.cache.clone())
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.settings, &self.presence, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.settings, &self.presence, ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(
            &self.settings,
            self.avatars.as_ref(),
            ctx,
            new_member,
        )
        .await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.settings,
            self.avatars.as_ref(),
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a user interacts with a component, command or modal
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.settings, ctx, interaction).await;
    }
}
