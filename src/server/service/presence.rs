//! Bot connection state shared between the gateway handler and the panel.
//!
//! The bot's own user id is only known once the gateway reports `ready`. Until then
//! reconciliation has no way to recognize the bot's messages and is skipped.

use chrono::{DateTime, Utc};
use serenity::all::UserId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identity of the connected bot account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotIdentity {
    pub user_id: UserId,
    pub username: String,
}

/// Tracks whether the bot is connected and as whom.
///
/// Cloning shares the same underlying state, so the handler and the panel see the
/// same connection status.
#[derive(Clone)]
pub struct PresenceService {
    identity: Arc<RwLock<Option<BotIdentity>>>,
    started_at: DateTime<Utc>,
}

impl PresenceService {
    /// Creates a new PresenceService with the bot marked offline.
    ///
    /// Process uptime is measured from this call.
    pub fn new() -> Self {
        Self {
            identity: Arc::new(RwLock::new(None)),
            started_at: Utc::now(),
        }
    }

    /// Records the bot identity reported by the gateway `ready` event.
    ///
    /// # Arguments
    /// - `user_id` - The bot's user id
    /// - `username` - The bot's account name
    pub async fn mark_ready(&self, user_id: UserId, username: String) {
        *self.identity.write().await = Some(BotIdentity { user_id, username });
    }

    /// Marks the bot as disconnected.
    pub async fn mark_offline(&self) {
        *self.identity.write().await = None;
    }

    /// Returns the connected bot identity.
    ///
    /// # Returns
    /// - `Some(BotIdentity)` - The bot has completed the gateway handshake
    /// - `None` - The bot is not connected yet or has shut down
    pub async fn identity(&self) -> Option<BotIdentity> {
        self.identity.read().await.clone()
    }

    /// When the process started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since the process started.
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}

impl Default for PresenceService {
    fn default() -> Self {
        Self::new()
    }
}
