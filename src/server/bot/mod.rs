//! Discord bot integration for member verification and greetings.
//!
//! This module connects to the Discord gateway and reacts to guild events: it keeps a
//! single verification prompt in each guild's verify channel, grants the verified role
//! when the prompt's button is pressed and posts welcome/leave banners when members
//! join or leave.
//!
//! The bot is initialized during startup and runs in a separate tokio task so it does
//! not block the configuration panel. The bot's HTTP client and cache are shared with
//! the panel so a settings change can re-run reconciliation without a second
//! connection to Discord.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, role and channel state
//! - `GUILD_MEMBERS` - Receive member join and leave events (privileged intent)
//!
//! Verify-channel history is read over REST, so no message intent is needed.
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
