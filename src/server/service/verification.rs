//! Verification role and prompt management.
//!
//! Reconciliation brings a guild to the state where the verified role exists and the
//! verify channel holds exactly one bot-authored prompt with the verification button.
//! It is safe to run repeatedly: every pass purges the bot's own recent messages in
//! the verify channel before posting a fresh prompt, so the prompt always reflects
//! the current settings.

use serenity::all::{GuildId, UserId};

use crate::server::{
    data::discord::GuildGateway,
    error::AppError,
    model::{
        guild::{GuildRoleInfo, GuildSnapshot},
        member::MemberIdentity,
        settings::BotSettings,
        verification::{ReconcileOutcome, VerifyOutcome, RECENT_MESSAGE_WINDOW, VERIFY_BUTTON_ID},
    },
};

pub struct VerificationService<'a> {
    gateway: &'a dyn GuildGateway,
}

impl<'a> VerificationService<'a> {
    /// Creates a new VerificationService instance.
    ///
    /// # Arguments
    /// - `gateway` - Discord operations used for roles and messages
    ///
    /// # Returns
    /// - `VerificationService` - New service instance
    pub fn new(gateway: &'a dyn GuildGateway) -> Self {
        Self { gateway }
    }

    /// Reconciles a single guild against the given settings.
    ///
    /// Creates the verified role when no role carries the configured name, then, if
    /// the verify channel exists, deletes every message the bot authored among the
    /// most recent `RECENT_MESSAGE_WINDOW` and posts a new prompt. Messages from other
    /// authors are never touched. Individual delete failures are logged and skipped.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to reconcile
    /// - `bot_user_id` - The bot's own user id, used to recognize its messages
    /// - `settings` - Settings snapshot taken at dispatch time
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome::NoVerifyChannel)` - No verify channel; no messages touched
    /// - `Ok(ReconcileOutcome::Posted)` - Fresh prompt posted
    /// - `Err(AppError)` - Reading the guild, creating the role, listing messages or
    ///   posting the prompt failed
    pub async fn reconcile(
        &self,
        guild_id: GuildId,
        bot_user_id: UserId,
        settings: &BotSettings,
    ) -> Result<ReconcileOutcome, AppError> {
        let snapshot = self.gateway.guild_snapshot(guild_id).await?;

        self.ensure_role(&snapshot, &settings.member_role_name)
            .await?;

        let Some(channel) = snapshot.text_channel_named(&settings.verify_channel_name) else {
            tracing::debug!(
                "Guild {} has no #{} channel, skipping verification prompt",
                snapshot.name,
                settings.verify_channel_name
            );
            return Ok(ReconcileOutcome::NoVerifyChannel);
        };

        let recent = self
            .gateway
            .recent_messages(channel.id, RECENT_MESSAGE_WINDOW)
            .await?;

        let stale: Vec<_> = recent
            .iter()
            .filter(|m| m.author_id == bot_user_id)
            .collect();

        tracing::debug!(
            "Found {} bot message(s) in #{} of {}, {} with a verification button",
            stale.len(),
            channel.name,
            snapshot.name,
            stale.iter().filter(|m| m.has_button(VERIFY_BUTTON_ID)).count()
        );

        let mut purged = 0;
        for message in stale {
            match self.gateway.delete_message(channel.id, message.id).await {
                Ok(()) => purged += 1,
                Err(e) => tracing::warn!(
                    "Failed to delete message {} in #{} of {}: {}",
                    message.id,
                    channel.name,
                    snapshot.name,
                    e
                ),
            }
        }

        let message_id = self
            .gateway
            .send_verification_prompt(
                channel.id,
                &settings.verification_prompt(),
                &settings.verify_button_text,
            )
            .await?;

        tracing::info!(
            "Posted verification prompt in #{} of {} ({} stale message(s) removed)",
            channel.name,
            snapshot.name,
            purged
        );

        Ok(ReconcileOutcome::Posted {
            channel_id: channel.id,
            message_id,
            purged,
        })
    }

    /// Reconciles every guild the bot is in.
    ///
    /// A failure in one guild is logged and does not stop the remaining guilds.
    ///
    /// # Returns
    /// - `usize` - Number of guilds that reconciled without error
    pub async fn reconcile_all(&self, bot_user_id: UserId, settings: &BotSettings) -> usize {
        let mut reconciled = 0;

        for guild_id in self.gateway.guild_ids() {
            match self.reconcile(guild_id, bot_user_id, settings).await {
                Ok(_) => reconciled += 1,
                Err(e) => tracing::error!("Failed to reconcile guild {}: {}", guild_id, e),
            }
        }

        reconciled
    }

    /// Grants the verified role to the member who pressed the verification button.
    ///
    /// The role is looked up by exact name on every press. Granting a role the member
    /// already holds is a no-op on Discord's side and still reports success.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the button was pressed in
    /// - `actor` - User who pressed the button
    /// - `settings` - Settings snapshot taken at dispatch time
    ///
    /// # Returns
    /// - `Ok(VerifyOutcome::BotRejected)` - Actor is a bot; nothing changed
    /// - `Ok(VerifyOutcome::RoleMissing)` - No role with the configured name; nothing changed
    /// - `Ok(VerifyOutcome::Granted)` - Role added
    /// - `Err(AppError)` - Reading the guild or adding the role failed
    pub async fn verify_member(
        &self,
        guild_id: GuildId,
        actor: &MemberIdentity,
        settings: &BotSettings,
    ) -> Result<VerifyOutcome, AppError> {
        if actor.bot {
            return Ok(VerifyOutcome::BotRejected);
        }

        let snapshot = self.gateway.guild_snapshot(guild_id).await?;

        let Some(role) = snapshot.role_named(&settings.member_role_name) else {
            tracing::warn!(
                "Role \"{}\" not found in {} while verifying {}",
                settings.member_role_name,
                snapshot.name,
                actor.username
            );
            return Ok(VerifyOutcome::RoleMissing {
                role_name: settings.member_role_name.clone(),
            });
        };

        self.gateway
            .add_member_role(guild_id, actor.user_id, role.id)
            .await?;

        tracing::info!("Verified {} in {}", actor.username, snapshot.name);

        Ok(VerifyOutcome::Granted {
            role_name: role.name.clone(),
        })
    }

    /// Returns the role named `role_name`, creating it when absent.
    async fn ensure_role(
        &self,
        snapshot: &GuildSnapshot,
        role_name: &str,
    ) -> Result<GuildRoleInfo, AppError> {
        if let Some(role) = snapshot.role_named(role_name) {
            return Ok(role.clone());
        }

        let role = self.gateway.create_role(snapshot.id, role_name).await?;

        tracing::info!("Created role {} in {}", role.name, snapshot.name);

        Ok(role)
    }
}
