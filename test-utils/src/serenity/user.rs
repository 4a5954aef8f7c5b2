//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `avatar_hash` - Optional avatar hash (padded to 32 hex characters if shorter)
/// - `bot` - Whether the account is a bot account
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, avatar_hash: Option<&str>, bot: bool) -> User {
    let avatar = avatar_hash.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": avatar,
        "bot": bot,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
