//! Process-wide runtime settings and the panel update flow.
//!
//! Settings live only in memory and start from the environment defaults. Readers take
//! a cloned snapshot, so a handler that started under the old settings finishes with
//! them even if the panel writes new ones mid-flight.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{
    data::discord::GuildGateway,
    error::AppError,
    model::settings::{BotSettings, UpdateSettingsParam},
    service::{presence::PresenceService, verification::VerificationService},
};

/// Shared, mutable holder of the current `BotSettings`.
#[derive(Clone)]
pub struct SettingsStore {
    settings: Arc<RwLock<BotSettings>>,
}

impl SettingsStore {
    pub fn new(initial: BotSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns a copy of the current settings.
    pub async fn snapshot(&self) -> BotSettings {
        self.settings.read().await.clone()
    }

    /// Merges `update` over the current settings under a single write lock.
    ///
    /// # Returns
    /// - `BotSettings` - The settings now in effect
    pub async fn merge(&self, update: UpdateSettingsParam) -> BotSettings {
        let mut settings = self.settings.write().await;
        let merged = update.apply_to(&settings);
        *settings = merged.clone();
        merged
    }
}

pub struct SettingsService<'a> {
    store: &'a SettingsStore,
    gateway: &'a dyn GuildGateway,
    presence: &'a PresenceService,
}

impl<'a> SettingsService<'a> {
    /// Creates a new SettingsService instance.
    ///
    /// # Arguments
    /// - `store` - Settings holder to read and replace
    /// - `gateway` - Discord operations used to re-run reconciliation
    /// - `presence` - Bot connection state
    ///
    /// # Returns
    /// - `SettingsService` - New service instance
    pub fn new(
        store: &'a SettingsStore,
        gateway: &'a dyn GuildGateway,
        presence: &'a PresenceService,
    ) -> Self {
        Self {
            store,
            gateway,
            presence,
        }
    }

    pub async fn get(&self) -> BotSettings {
        self.store.snapshot().await
    }

    /// Validates and applies a settings update, then reconciles every guild.
    ///
    /// Reconciliation runs before returning so the caller's response reflects it.
    /// When the bot is not connected the settings are still stored and reconciliation
    /// is skipped; it runs on the next `ready`.
    ///
    /// # Arguments
    /// - `update` - Partial update from the panel
    ///
    /// # Returns
    /// - `Ok(String)` - Human readable summary for the panel
    /// - `Err(AppError::BadRequest)` - A required key was missing or blank; nothing stored
    pub async fn update(&self, update: UpdateSettingsParam) -> Result<String, AppError> {
        update.validate()?;

        let settings = self.store.merge(update).await;

        tracing::info!(
            "Settings updated: verify channel #{}, log channel #{}, role {}",
            settings.verify_channel_name,
            settings.log_channel_name,
            settings.member_role_name
        );

        let Some(bot) = self.presence.identity().await else {
            tracing::warn!("Bot is offline, verification prompts will refresh on reconnect");
            return Ok("Settings saved. Bot is offline; guilds will update when it reconnects."
                .to_string());
        };

        let total = self.gateway.guild_ids().len();
        let reconciled = VerificationService::new(self.gateway)
            .reconcile_all(bot.user_id, &settings)
            .await;

        Ok(format!(
            "Settings saved. Reconciled {} of {} guild(s).",
            reconciled, total
        ))
    }
}
