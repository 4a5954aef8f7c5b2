//! Application state shared across all panel request handlers.
//!
//! The state is initialized once during startup, after the Discord client has been
//! built, and then cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::{
    data::discord::GuildGateway,
    service::{presence::PresenceService, settings::SettingsStore},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the settings store and presence service share
/// their state through `Arc`, and the gateway is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings, shared with the bot's event handler.
    pub settings: SettingsStore,

    /// Bot connection state, shared with the bot's event handler.
    pub presence: PresenceService,

    /// Discord operations used to reconcile guilds after a settings change.
    pub gateway: Arc<dyn GuildGateway>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `settings` - Shared runtime settings
    /// - `presence` - Shared bot connection state
    /// - `gateway` - Discord gateway backed by the bot's HTTP client and cache
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        settings: SettingsStore,
        presence: PresenceService,
        gateway: Arc<dyn GuildGateway>,
    ) -> Self {
        Self {
            settings,
            presence,
            gateway,
        }
    }
}
