//! Per-event member identity used to render banners.

use serenity::all::{User, UserId};

const DISCORD_CDN: &str = "https://cdn.discordapp.com";
/// Avatar edge length requested from the CDN.
const AVATAR_SIZE: u32 = 256;

/// Who a membership event is about. Supplied per event and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberIdentity {
    pub user_id: UserId,
    /// Unique account name, drawn under the banner title
    pub username: String,
    /// Global display name, falling back to the username
    pub display_name: String,
    /// PNG avatar URL at 256px; the default avatar when the user has none
    pub avatar_url: String,
    pub bot: bool,
}

impl From<&User> for MemberIdentity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.name.clone(),
            display_name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
            avatar_url: avatar_url(user),
            bot: user.bot,
        }
    }
}

/// Builds the PNG avatar URL for a user.
///
/// Users without a custom avatar get one of Discord's default avatars, chosen from
/// the legacy discriminator when present and from the snowflake otherwise.
fn avatar_url(user: &User) -> String {
    match &user.avatar {
        Some(hash) => format!(
            "{}/avatars/{}/{}.png?size={}",
            DISCORD_CDN, user.id, hash, AVATAR_SIZE
        ),
        None => {
            let index = match user.discriminator {
                Some(discriminator) => u64::from(discriminator.get()) % 5,
                None => (user.id.get() >> 22) % 6,
            };
            format!("{}/embed/avatars/{}.png", DISCORD_CDN, index)
        }
    }
}
