//! Welcome and leave announcements.

use serenity::all::{ChannelId, GuildId};

use crate::server::{
    data::{avatar::AvatarSource, discord::GuildGateway},
    error::AppError,
    model::{banner::BannerKind, member::MemberIdentity, settings::BotSettings},
    service::banner::BannerService,
};

pub struct GreetingService<'a> {
    gateway: &'a dyn GuildGateway,
    avatars: &'a dyn AvatarSource,
}

impl<'a> GreetingService<'a> {
    /// Creates a new GreetingService instance.
    ///
    /// # Arguments
    /// - `gateway` - Discord operations used to resolve channels and post banners
    /// - `avatars` - Source used to download member avatars
    ///
    /// # Returns
    /// - `GreetingService` - New service instance
    pub fn new(gateway: &'a dyn GuildGateway, avatars: &'a dyn AvatarSource) -> Self {
        Self { gateway, avatars }
    }

    /// Posts a welcome or leave banner for `member`.
    ///
    /// The banner goes to the configured log channel, else the guild's system channel.
    /// When neither exists nothing is rendered or sent.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member joined or left
    /// - `member` - Member the event is about
    /// - `kind` - Join or leave
    /// - `settings` - Settings snapshot taken at dispatch time
    ///
    /// # Returns
    /// - `Ok(Some(channel_id))` - Banner posted to this channel
    /// - `Ok(None)` - No destination channel
    /// - `Err(AppError)` - Reading the guild, rendering or sending failed
    pub async fn announce(
        &self,
        guild_id: GuildId,
        member: &MemberIdentity,
        kind: BannerKind,
        settings: &BotSettings,
    ) -> Result<Option<ChannelId>, AppError> {
        let snapshot = self.gateway.guild_snapshot(guild_id).await?;

        let Some(channel_id) = snapshot.announcement_channel(&settings.log_channel_name) else {
            tracing::debug!(
                "Guild {} has no #{} or system channel, skipping {:?} banner",
                snapshot.name,
                settings.log_channel_name,
                kind
            );
            return Ok(None);
        };

        let banner = BannerService::new(self.avatars).render(member, kind).await?;
        self.gateway.send_banner(channel_id, banner).await?;

        tracing::info!(
            "Posted {:?} banner for {} ({}) in {}",
            kind,
            member.display_name,
            member.user_id,
            snapshot.name
        );

        Ok(Some(channel_id))
    }
}
