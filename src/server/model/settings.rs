//! Runtime bot settings and the partial update applied by the configuration panel.

use crate::{
    model::settings::{SettingsDto, UpdateSettingsDto},
    server::error::AppError,
};

/// Text settings that drive verification and greeting behavior.
///
/// Every reconciliation pass and event handler works from one cloned snapshot of
/// this struct, read from the `SettingsStore` at dispatch time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotSettings {
    /// Name of the text channel holding the verification prompt
    pub verify_channel_name: String,
    /// Name of the text channel receiving welcome/leave banners
    pub log_channel_name: String,
    /// Name of the role granted on verification (exact, case-sensitive match)
    pub member_role_name: String,
    /// Label of the verification button
    pub verify_button_text: String,
    /// Prompt text preceding the role name in the verification message
    pub verify_message: String,
    /// Reply text preceding the role name after a successful verification
    pub success_message: String,
}

impl BotSettings {
    /// Content of the verification prompt message, e.g. `Press to verify **Member**`.
    pub fn verification_prompt(&self) -> String {
        format!("{} **{}**", self.verify_message, self.member_role_name)
    }

    pub fn into_dto(self) -> SettingsDto {
        SettingsDto {
            verify_channel_name: self.verify_channel_name,
            log_channel_name: self.log_channel_name,
            member_role_name: self.member_role_name,
            verify_button_text: self.verify_button_text,
            verify_message: self.verify_message,
            success_message: self.success_message,
        }
    }
}

/// Partial settings update submitted through the panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateSettingsParam {
    pub verify_channel_name: Option<String>,
    pub log_channel_name: Option<String>,
    pub member_role_name: Option<String>,
    pub verify_button_text: Option<String>,
    pub verify_message: Option<String>,
    pub success_message: Option<String>,
}

impl UpdateSettingsParam {
    /// Keys that must be present and non-empty on every write.
    pub const REQUIRED_KEYS: [&'static str; 4] = [
        "VERIFY_CHANNEL_NAME",
        "LOG_CHANNEL_NAME",
        "MEMBER_ROLE_NAME",
        "VERIFY_BUTTON_TEXT",
    ];

    /// Checks that all required keys carry non-blank values.
    ///
    /// # Returns
    /// - `Ok(())` - All required keys are present
    /// - `Err(AppError::BadRequest)` - Message lists every missing key
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            &self.verify_channel_name,
            &self.log_channel_name,
            &self.member_role_name,
            &self.verify_button_text,
        ];

        let missing: Vec<&str> = Self::REQUIRED_KEYS
            .iter()
            .zip(required)
            .filter(|(_, value)| is_blank(value))
            .map(|(key, _)| *key)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Missing required settings: {}",
                missing.join(", ")
            )))
        }
    }

    /// Merges this update over `current`; keys left as `None` or blank keep their value.
    ///
    /// Values are trimmed, since names are matched exactly against Discord.
    pub fn apply_to(self, current: &BotSettings) -> BotSettings {
        let merge = |update: Option<String>, existing: &String| match update {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => existing.clone(),
        };

        BotSettings {
            verify_channel_name: merge(self.verify_channel_name, &current.verify_channel_name),
            log_channel_name: merge(self.log_channel_name, &current.log_channel_name),
            member_role_name: merge(self.member_role_name, &current.member_role_name),
            verify_button_text: merge(self.verify_button_text, &current.verify_button_text),
            verify_message: merge(self.verify_message, &current.verify_message),
            success_message: merge(self.success_message, &current.success_message),
        }
    }
}

impl From<UpdateSettingsDto> for UpdateSettingsParam {
    fn from(dto: UpdateSettingsDto) -> Self {
        Self {
            verify_channel_name: dto.verify_channel_name,
            log_channel_name: dto.log_channel_name,
            member_role_name: dto.member_role_name,
            verify_button_text: dto.verify_button_text,
            verify_message: dto.verify_message,
            success_message: dto.success_message,
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
