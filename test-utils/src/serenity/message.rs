//! Test factory for creating Serenity Message objects.
//!
//! Messages are built from the JSON shape returned by Discord's
//! `GET /channels/{channel.id}/messages` endpoint.

use serenity::all::Message;

/// Discord component type for action rows.
const COMPONENT_TYPE_ACTION_ROW: u8 = 1;
/// Discord component type for buttons.
const COMPONENT_TYPE_BUTTON: u8 = 2;
/// Discord button style `Success` (green).
const BUTTON_STYLE_SUCCESS: u8 = 3;

/// Creates a test message authored by the given user.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - ID of the author
/// - `content` - Text content
/// - `button_custom_ids` - Custom IDs of buttons to attach, placed in a single action row
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_message;
///
/// let prompt = create_test_message(1, 2, 3, "Press to verify", &["verify_btn"]);
/// let plain = create_test_message(4, 2, 5, "hello", &[]);
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
    button_custom_ids: &[&str],
) -> Message {
    let components = if button_custom_ids.is_empty() {
        serde_json::json!([])
    } else {
        let buttons: Vec<serde_json::Value> = button_custom_ids
            .iter()
            .map(|custom_id| {
                serde_json::json!({
                    "type": COMPONENT_TYPE_BUTTON,
                    "style": BUTTON_STYLE_SUCCESS,
                    "label": "Verify",
                    "custom_id": custom_id,
                })
            })
            .collect();

        serde_json::json!([{
            "type": COMPONENT_TYPE_ACTION_ROW,
            "components": buttons,
        }])
    };

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": format!("user{}", author_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
        "components": components,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
