use serenity::all::{ChannelId, GuildId, RoleId, UserId};

use crate::server::{
    data::fake::{
        guild_snapshot, plain_message, prompt_message, solid_png, FakeAvatarSource,
        FakeGuildGateway,
    },
    error::AppError,
    model::{
        banner::BannerKind,
        member::MemberIdentity,
        settings::{BotSettings, UpdateSettingsParam},
        verification::{ReconcileOutcome, VerifyOutcome, VERIFY_BUTTON_ID},
    },
};

mod banner;
mod greeting;
mod settings;

const BOT_USER_ID: u64 = 1;
const GUILD_ID: u64 = 100;
const VERIFY_CHANNEL_ID: u64 = 200;
const LOG_CHANNEL_ID: u64 = 201;
const SYSTEM_CHANNEL_ID: u64 = 202;
const MEMBER_ROLE_ID: u64 = 300;

fn test_settings() -> BotSettings {
    BotSettings {
        verify_channel_name: "verify".to_string(),
        log_channel_name: "welcome-log".to_string(),
        member_role_name: "Member".to_string(),
        verify_button_text: "Verify".to_string(),
        verify_message: "Press to verify".to_string(),
        success_message: "Verified!".to_string(),
    }
}

fn test_member(user_id: u64, bot: bool) -> MemberIdentity {
    MemberIdentity {
        user_id: UserId::new(user_id),
        username: "alice".to_string(),
        display_name: "Alice".to_string(),
        avatar_url: format!("https://cdn.discordapp.com/avatars/{}/abc.png?size=256", user_id),
        bot,
    }
}
