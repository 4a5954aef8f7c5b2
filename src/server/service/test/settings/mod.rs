use super::*;
use crate::server::service::{
    presence::PresenceService,
    settings::{SettingsService, SettingsStore},
};

mod update;

fn complete_update() -> UpdateSettingsParam {
    UpdateSettingsParam {
        verify_channel_name: Some("verify".to_string()),
        log_channel_name: Some("welcome-log".to_string()),
        member_role_name: Some("Verified".to_string()),
        verify_button_text: Some("Let me in".to_string()),
        ..Default::default()
    }
}
