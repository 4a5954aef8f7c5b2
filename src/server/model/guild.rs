//! Read-only views of guild state used by the verification and greeting services.
//!
//! Roles and channels are identified by name, never by a cached id. When several
//! roles or channels share a name, the first one in Discord's display order
//! (ascending position, then id) is used. Duplicate names are ambiguous and are
//! deliberately left that way.

use std::collections::HashMap;

use serenity::all::{
    ActionRowComponent, ButtonKind, ChannelId, ChannelType, Guild, GuildChannel, GuildId,
    Message, MessageId, PartialGuild, Role, RoleId, UserId,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuildRoleInfo {
    pub id: RoleId,
    pub name: String,
    pub position: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextChannelInfo {
    pub id: ChannelId,
    pub name: String,
    pub position: u16,
}

/// Snapshot of the parts of a guild this bot reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuildSnapshot {
    pub id: GuildId,
    pub name: String,
    /// Roles sorted by position, then id
    pub roles: Vec<GuildRoleInfo>,
    /// Text channels only, sorted by position, then id
    pub text_channels: Vec<TextChannelInfo>,
    pub system_channel_id: Option<ChannelId>,
}

impl GuildSnapshot {
    /// Builds a snapshot from a full guild, as held in the gateway cache.
    pub fn from_guild(guild: &Guild) -> Self {
        Self {
            id: guild.id,
            name: guild.name.clone(),
            roles: sorted_roles(&guild.roles),
            text_channels: sorted_text_channels(&guild.channels),
            system_channel_id: guild.system_channel_id,
        }
    }

    /// Builds a snapshot from REST responses when the guild is not cached.
    pub fn from_parts(guild: &PartialGuild, channels: &HashMap<ChannelId, GuildChannel>) -> Self {
        Self {
            id: guild.id,
            name: guild.name.clone(),
            roles: sorted_roles(&guild.roles),
            text_channels: sorted_text_channels(channels),
            system_channel_id: guild.system_channel_id,
        }
    }

    /// Finds the first role whose name matches exactly.
    pub fn role_named(&self, name: &str) -> Option<&GuildRoleInfo> {
        self.roles.iter().find(|role| role.name == name)
    }

    /// Finds the first text channel whose name matches exactly.
    pub fn text_channel_named(&self, name: &str) -> Option<&TextChannelInfo> {
        self.text_channels.iter().find(|channel| channel.name == name)
    }

    /// Resolves where welcome/leave banners are posted.
    ///
    /// Uses the named log channel when it exists, else the guild's system channel.
    pub fn announcement_channel(&self, log_channel_name: &str) -> Option<ChannelId> {
        self.text_channel_named(log_channel_name)
            .map(|channel| channel.id)
            .or(self.system_channel_id)
    }
}

fn sorted_roles(roles: &HashMap<RoleId, Role>) -> Vec<GuildRoleInfo> {
    let mut roles: Vec<GuildRoleInfo> = roles
        .values()
        .map(|role| GuildRoleInfo {
            id: role.id,
            name: role.name.clone(),
            position: role.position,
        })
        .collect();
    roles.sort_by_key(|role| (role.position, role.id));
    roles
}

fn sorted_text_channels(channels: &HashMap<ChannelId, GuildChannel>) -> Vec<TextChannelInfo> {
    let mut channels: Vec<TextChannelInfo> = channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .map(|channel| TextChannelInfo {
            id: channel.id,
            name: channel.name.clone(),
            position: channel.position,
        })
        .collect();
    channels.sort_by_key(|channel| (channel.position, channel.id));
    channels
}

/// A recent channel message as seen by the reconciler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: MessageId,
    pub author_id: UserId,
    /// Custom ids of every interactive (non-link) button on the message
    pub button_ids: Vec<String>,
}

impl ChannelMessage {
    pub fn has_button(&self, custom_id: &str) -> bool {
        self.button_ids.iter().any(|id| id == custom_id)
    }
}

impl From<&Message> for ChannelMessage {
    fn from(message: &Message) -> Self {
        let button_ids = message
            .components
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::Button(button) => match &button.data {
                    ButtonKind::NonLink { custom_id, .. } => Some(custom_id.clone()),
                    _ => None,
                },
                _ => None,
            })
            .collect();

        Self {
            id: message.id,
            author_id: message.author.id,
            button_ids,
        }
    }
}
