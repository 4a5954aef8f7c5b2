//! Test factory for Serenity roles.

use serenity::all::Role;

/// Builds a plain, unmanaged role as it appears in a guild payload.
///
/// # Arguments
/// - `role_id` - Role snowflake
/// - `name` - Role name, matched case-sensitively by the bot
/// - `position` - Position in the guild's role list; lower positions win name lookups
///
/// # Panics
/// - If serenity rejects the generated JSON
pub fn create_test_role(role_id: u64, name: &str, position: u16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
