//! In-memory stand-ins for the Discord gateway and the avatar CDN.

use std::{collections::HashMap, sync::Mutex};

use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use serenity::async_trait;
use tiny_skia::Pixmap;

use crate::server::{
    data::{avatar::AvatarSource, discord::GuildGateway},
    error::AppError,
    model::{
        banner::RenderedBanner,
        guild::{ChannelMessage, GuildRoleInfo, GuildSnapshot, TextChannelInfo},
        verification::VERIFY_BUTTON_ID,
    },
};

/// Builds a guild snapshot from `(id, name)` pairs, positioned in the given order.
pub fn guild_snapshot(
    guild_id: u64,
    roles: &[(u64, &str)],
    text_channels: &[(u64, &str)],
    system_channel_id: Option<u64>,
) -> GuildSnapshot {
    GuildSnapshot {
        id: GuildId::new(guild_id),
        name: format!("Guild {}", guild_id),
        roles: roles
            .iter()
            .enumerate()
            .map(|(position, (id, name))| GuildRoleInfo {
                id: RoleId::new(*id),
                name: name.to_string(),
                position: position as u16,
            })
            .collect(),
        text_channels: text_channels
            .iter()
            .enumerate()
            .map(|(position, (id, name))| TextChannelInfo {
                id: ChannelId::new(*id),
                name: name.to_string(),
                position: position as u16,
            })
            .collect(),
        system_channel_id: system_channel_id.map(ChannelId::new),
    }
}

/// A plain message with no components.
pub fn plain_message(message_id: u64, author_id: u64) -> ChannelMessage {
    ChannelMessage {
        id: MessageId::new(message_id),
        author_id: UserId::new(author_id),
        button_ids: Vec::new(),
    }
}

/// A message carrying the verification button.
pub fn prompt_message(message_id: u64, author_id: u64) -> ChannelMessage {
    ChannelMessage {
        button_ids: vec![VERIFY_BUTTON_ID.to_string()],
        ..plain_message(message_id, author_id)
    }
}

#[derive(Default)]
struct GatewayState {
    guilds: HashMap<GuildId, GuildSnapshot>,
    /// Newest first, as Discord returns them
    messages: HashMap<ChannelId, Vec<ChannelMessage>>,
    created_roles: Vec<(GuildId, String)>,
    prompts: Vec<(ChannelId, String, String)>,
    banners: Vec<(ChannelId, RenderedBanner)>,
    grants: Vec<(GuildId, UserId, RoleId)>,
    next_id: u64,
}

/// `GuildGateway` over in-memory guilds that records every mutation.
pub struct FakeGuildGateway {
    bot_user_id: UserId,
    fail_deletes: bool,
    fail_role_create: bool,
    state: Mutex<GatewayState>,
}

impl FakeGuildGateway {
    pub fn new(bot_user_id: u64) -> Self {
        Self {
            bot_user_id: UserId::new(bot_user_id),
            fail_deletes: false,
            fail_role_create: false,
            state: Mutex::new(GatewayState {
                next_id: 9_000,
                ..Default::default()
            }),
        }
    }

    pub fn with_guild(self, snapshot: GuildSnapshot) -> Self {
        self.state
            .lock()
            .unwrap()
            .guilds
            .insert(snapshot.id, snapshot);
        self
    }

    pub fn with_messages(self, channel_id: u64, messages: Vec<ChannelMessage>) -> Self {
        self.state
            .lock()
            .unwrap()
            .messages
            .insert(ChannelId::new(channel_id), messages);
        self
    }

    /// Makes every message deletion fail.
    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    /// Makes every role creation fail.
    pub fn failing_role_create(mut self) -> Self {
        self.fail_role_create = true;
        self
    }

    pub fn messages_in(&self, channel_id: u64) -> Vec<ChannelMessage> {
        self.state
            .lock()
            .unwrap()
            .messages
            .get(&ChannelId::new(channel_id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn created_roles(&self) -> Vec<(GuildId, String)> {
        self.state.lock().unwrap().created_roles.clone()
    }

    /// `(channel, content, button label)` of every prompt sent.
    pub fn prompts(&self) -> Vec<(ChannelId, String, String)> {
        self.state.lock().unwrap().prompts.clone()
    }

    pub fn banners(&self) -> Vec<(ChannelId, RenderedBanner)> {
        self.state.lock().unwrap().banners.clone()
    }

    pub fn grants(&self) -> Vec<(GuildId, UserId, RoleId)> {
        self.state.lock().unwrap().grants.clone()
    }

    fn push_message(&self, channel_id: ChannelId, button_ids: Vec<String>) -> MessageId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = MessageId::new(state.next_id);

        state.messages.entry(channel_id).or_default().insert(
            0,
            ChannelMessage {
                id,
                author_id: self.bot_user_id,
                button_ids,
            },
        );

        id
    }
}

#[async_trait]
impl GuildGateway for FakeGuildGateway {
    fn guild_ids(&self) -> Vec<GuildId> {
        let mut ids: Vec<GuildId> = self.state.lock().unwrap().guilds.keys().copied().collect();
        ids.sort();
        ids
    }

    async fn guild_snapshot(&self, guild_id: GuildId) -> Result<GuildSnapshot, AppError> {
        self.state
            .lock()
            .unwrap()
            .guilds
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("Unknown Guild {}", guild_id)))
    }

    async fn create_role(&self, guild_id: GuildId, name: &str) -> Result<GuildRoleInfo, AppError> {
        if self.fail_role_create {
            return Err(AppError::InternalError("Missing Permissions".to_string()));
        }

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let role = GuildRoleInfo {
            id: RoleId::new(state.next_id),
            name: name.to_string(),
            position: 1,
        };

        state.created_roles.push((guild_id, name.to_string()));
        if let Some(guild) = state.guilds.get_mut(&guild_id) {
            guild.roles.push(role.clone());
        }

        Ok(role)
    }

    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        Ok(self
            .messages_in(channel_id.get())
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        if self.fail_deletes {
            return Err(AppError::InternalError("Unknown Message".to_string()));
        }

        if let Some(messages) = self.state.lock().unwrap().messages.get_mut(&channel_id) {
            messages.retain(|message| message.id != message_id);
        }

        Ok(())
    }

    async fn send_verification_prompt(
        &self,
        channel_id: ChannelId,
        content: &str,
        button_label: &str,
    ) -> Result<MessageId, AppError> {
        self.state.lock().unwrap().prompts.push((
            channel_id,
            content.to_string(),
            button_label.to_string(),
        ));

        Ok(self.push_message(channel_id, vec![VERIFY_BUTTON_ID.to_string()]))
    }

    async fn send_banner(
        &self,
        channel_id: ChannelId,
        banner: RenderedBanner,
    ) -> Result<MessageId, AppError> {
        self.state.lock().unwrap().banners.push((channel_id, banner));

        Ok(self.push_message(channel_id, Vec::new()))
    }

    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.state
            .lock()
            .unwrap()
            .grants
            .push((guild_id, user_id, role_id));

        Ok(())
    }
}

/// `AvatarSource` returning fixed bytes, or failing when none are set.
pub struct FakeAvatarSource {
    bytes: Option<Vec<u8>>,
}

impl FakeAvatarSource {
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    pub fn unreachable() -> Self {
        Self { bytes: None }
    }
}

#[async_trait]
impl AvatarSource for FakeAvatarSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        self.bytes
            .clone()
            .ok_or_else(|| AppError::InternalError(format!("No avatar at {}", url)))
    }
}

/// Encodes a single-color square PNG.
pub fn solid_png(size: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut pixmap = Pixmap::new(size, size).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(rgb[0], rgb[1], rgb[2], 0xff));
    pixmap.encode_png().unwrap()
}
