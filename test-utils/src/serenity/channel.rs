//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Discord channel type for guild text channels.
pub const CHANNEL_TYPE_TEXT: u8 = 0;
/// Discord channel type for guild voice channels.
pub const CHANNEL_TYPE_VOICE: u8 = 2;

/// Creates a test guild text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `position` - Sorting position in the channel list
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, position, CHANNEL_TYPE_TEXT)
}

/// Creates a test guild channel of an arbitrary Discord channel type.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
    kind: u8,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
