use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full set of runtime settings as returned by `GET /api/config`.
///
/// Keys are serialized in upper snake case to match the environment variable names
/// the defaults are read from.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SettingsDto {
    pub verify_channel_name: String,
    pub log_channel_name: String,
    pub member_role_name: String,
    pub verify_button_text: String,
    pub verify_message: String,
    pub success_message: String,
}

/// Partial settings accepted by `POST /api/config`.
///
/// Omitted keys keep their current value. Unknown keys are ignored.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UpdateSettingsDto {
    #[serde(default)]
    pub verify_channel_name: Option<String>,
    #[serde(default)]
    pub log_channel_name: Option<String>,
    #[serde(default)]
    pub member_role_name: Option<String>,
    #[serde(default)]
    pub verify_button_text: Option<String>,
    #[serde(default)]
    pub verify_message: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct UpdateSettingsResultDto {
    pub success: bool,
    pub message: String,
}
