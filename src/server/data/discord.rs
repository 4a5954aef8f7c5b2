//! Discord capability surface used by the services.
//!
//! `GuildGateway` is the narrow set of Discord operations the bot needs: reading guild
//! roles and channels, creating the verified role, listing/deleting/sending channel
//! messages, and granting a role. Services depend on the trait so reconciliation and
//! verification can run against an in-memory gateway in tests; `SerenityGateway` is the
//! production implementation backed by serenity's cache and HTTP client.

use std::sync::Arc;

use serenity::all::{
    ButtonStyle, Cache, ChannelId, CreateActionRow, CreateAttachment, CreateButton,
    CreateMessage, EditRole, GetMessages, GuildId, MessageId, RoleId, UserId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::server::{
    error::AppError,
    model::{
        banner::RenderedBanner,
        guild::{ChannelMessage, GuildRoleInfo, GuildSnapshot},
        verification::{ROLE_CREATE_REASON, ROLE_GRANT_REASON, VERIFY_BUTTON_ID},
    },
};

#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// Guilds the bot is currently a member of.
    fn guild_ids(&self) -> Vec<GuildId>;

    /// Reads the guild's name, roles, text channels and system channel.
    async fn guild_snapshot(&self, guild_id: GuildId) -> Result<GuildSnapshot, AppError>;

    /// Creates a role with the given name.
    async fn create_role(&self, guild_id: GuildId, name: &str) -> Result<GuildRoleInfo, AppError>;

    /// Fetches up to `limit` of the most recent messages, newest first.
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Posts `content` with a single success-styled button carrying `VERIFY_BUTTON_ID`.
    async fn send_verification_prompt(
        &self,
        channel_id: ChannelId,
        content: &str,
        button_label: &str,
    ) -> Result<MessageId, AppError>;

    /// Posts the banner as a file attachment with no text body.
    async fn send_banner(
        &self,
        channel_id: ChannelId,
        banner: RenderedBanner,
    ) -> Result<MessageId, AppError>;

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;
}

/// `GuildGateway` backed by serenity.
///
/// Guild state is read from the gateway cache when present and from the REST API
/// otherwise. Both handles are reference counted, so the gateway is cheap to build
/// per event from a serenity `Context`.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl GuildGateway for SerenityGateway {
    fn guild_ids(&self) -> Vec<GuildId> {
        self.cache.guilds()
    }

    async fn guild_snapshot(&self, guild_id: GuildId) -> Result<GuildSnapshot, AppError> {
        let cached = self
            .cache
            .guild(guild_id)
            .map(|guild| GuildSnapshot::from_guild(&guild));

        if let Some(snapshot) = cached {
            return Ok(snapshot);
        }

        tracing::debug!("Guild {} not cached, fetching over REST", guild_id);

        let guild = guild_id.to_partial_guild(&self.http).await?;
        let channels = guild_id.channels(&self.http).await?;

        Ok(GuildSnapshot::from_parts(&guild, &channels))
    }

    async fn create_role(&self, guild_id: GuildId, name: &str) -> Result<GuildRoleInfo, AppError> {
        let role = guild_id
            .create_role(
                &self.http,
                EditRole::new().name(name).audit_log_reason(ROLE_CREATE_REASON),
            )
            .await?;

        Ok(GuildRoleInfo {
            id: role.id,
            name: role.name,
            position: role.position,
        })
    }

    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages.iter().map(ChannelMessage::from).collect())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        channel_id.delete_message(&self.http, message_id).await?;

        Ok(())
    }

    async fn send_verification_prompt(
        &self,
        channel_id: ChannelId,
        content: &str,
        button_label: &str,
    ) -> Result<MessageId, AppError> {
        let button = CreateButton::new(VERIFY_BUTTON_ID)
            .label(button_label)
            .style(ButtonStyle::Success);

        let message = channel_id
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(content)
                    .components(vec![CreateActionRow::Buttons(vec![button])]),
            )
            .await?;

        Ok(message.id)
    }

    async fn send_banner(
        &self,
        channel_id: ChannelId,
        banner: RenderedBanner,
    ) -> Result<MessageId, AppError> {
        let attachment = CreateAttachment::bytes(banner.png, banner.file_name);

        let message = channel_id
            .send_message(&self.http, CreateMessage::new().add_file(attachment))
            .await?;

        Ok(message.id)
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, Some(ROLE_GRANT_REASON))
            .await?;

        Ok(())
    }
}
