//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating what Discord's gateway would deliver in a `GUILD_CREATE` payload.

use serenity::all::{Guild, GuildChannel, Role};

/// Creates a test Serenity Guild populated with roles and channels.
///
/// Roles and channels are serialized back to JSON and embedded in the guild payload,
/// so the resulting guild has the same shape as one read from the cache.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `roles` - Roles to place in the guild
/// - `channels` - Channels to place in the guild
/// - `system_channel_id` - Optional system channel for join/leave notices
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_guild_with, create_test_role, create_test_text_channel};
///
/// let guild = create_test_guild_with(
///     1,
///     "Test Guild",
///     vec![create_test_role(10, "Member", 1)],
///     vec![create_test_text_channel(20, 1, "verify", 0)],
///     Some(20),
/// );
/// ```
pub fn create_test_guild_with(
    guild_id: u64,
    name: &str,
    roles: Vec<Role>,
    channels: Vec<GuildChannel>,
    system_channel_id: Option<u64>,
) -> Guild {
    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_id": system_channel_id.map(|id| id.to_string()),
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channels,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
