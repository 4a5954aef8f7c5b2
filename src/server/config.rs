use std::net::SocketAddr;
use std::path::PathBuf;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::settings::BotSettings,
};

const DEFAULT_PANEL_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PANEL_STATIC_DIR: &str = "public";

const DEFAULT_VERIFY_CHANNEL_NAME: &str = "verify";
const DEFAULT_LOG_CHANNEL_NAME: &str = "welcome-log";
const DEFAULT_MEMBER_ROLE_NAME: &str = "Member";
const DEFAULT_VERIFY_BUTTON_TEXT: &str = "✅ Verify";
const DEFAULT_VERIFY_MESSAGE: &str = "Press the button below to verify and receive the role";
const DEFAULT_SUCCESS_MESSAGE: &str = "✅ Verified! You have received the role";

pub struct Config {
    pub bot_token: String,

    pub panel_addr: SocketAddr,
    pub panel_static_dir: PathBuf,

    /// Initial runtime settings; the panel may replace them while the process runs.
    pub default_settings: BotSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bot_token = std::env::var("BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;

        let panel_addr = var_or("PANEL_ADDR", DEFAULT_PANEL_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "PANEL_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            bot_token,
            panel_addr,
            panel_static_dir: PathBuf::from(var_or("PANEL_STATIC_DIR", DEFAULT_PANEL_STATIC_DIR)),
            default_settings: BotSettings {
                verify_channel_name: var_or("VERIFY_CHANNEL_NAME", DEFAULT_VERIFY_CHANNEL_NAME),
                log_channel_name: var_or("LOG_CHANNEL_NAME", DEFAULT_LOG_CHANNEL_NAME),
                member_role_name: var_or("MEMBER_ROLE_NAME", DEFAULT_MEMBER_ROLE_NAME),
                verify_button_text: var_or("VERIFY_BUTTON_TEXT", DEFAULT_VERIFY_BUTTON_TEXT),
                verify_message: var_or("VERIFY_MESSAGE", DEFAULT_VERIFY_MESSAGE),
                success_message: var_or("SUCCESS_MESSAGE", DEFAULT_SUCCESS_MESSAGE),
            },
        })
    }
}

/// Reads an environment variable, falling back to `default` when unset or empty.
fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
