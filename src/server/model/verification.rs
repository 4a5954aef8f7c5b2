//! Verification prompt identifiers and the outcomes of verification operations.

use serenity::all::{ChannelId, MessageId};

/// Custom id carried by the verification button.
pub const VERIFY_BUTTON_ID: &str = "verify_btn";

/// How many of the most recent verify-channel messages a reconciliation pass inspects.
pub const RECENT_MESSAGE_WINDOW: u8 = 50;

/// Audit-log reason attached when the verified role is created.
pub const ROLE_CREATE_REASON: &str = "Role for verified members";

/// Audit-log reason attached when a member is granted the verified role.
pub const ROLE_GRANT_REASON: &str = "Member verified via button";

/// Ephemeral reply sent when granting the role fails on Discord's side.
pub const VERIFY_FAILED_REPLY: &str = "Verification failed, please try again later.";

/// Result of reconciling one guild.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No text channel with the configured verify channel name; nothing was touched.
    NoVerifyChannel,
    /// Stale bot messages were purged and a fresh prompt was posted.
    Posted {
        channel_id: ChannelId,
        message_id: MessageId,
        purged: usize,
    },
}

/// Result of a verification button press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The actor is a bot account; roles were not changed.
    BotRejected,
    /// No role with the configured name exists; roles were not changed.
    RoleMissing { role_name: String },
    /// The role was added to the actor (a no-op if they already had it).
    Granted { role_name: String },
}

impl VerifyOutcome {
    /// Text of the ephemeral reply for this outcome.
    ///
    /// # Arguments
    /// - `success_message` - Configured success text, used for `Granted`
    pub fn reply_content(&self, success_message: &str) -> String {
        match self {
            Self::BotRejected => "Bots cannot verify.".to_string(),
            Self::RoleMissing { role_name } => format!("Role \"{}\" was not found.", role_name),
            Self::Granted { role_name } => format!("{} **{}**", success_message, role_name),
        }
    }
}
