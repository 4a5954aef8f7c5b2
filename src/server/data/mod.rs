//! Access layer for external systems.
//!
//! The bot keeps no persistent storage. This module wraps the two outside systems the
//! services talk to, Discord (through serenity) and the avatar CDN (through reqwest),
//! behind the `GuildGateway` and `AvatarSource` traits so the service layer can be
//! exercised against in-memory fakes.

pub mod avatar;
pub mod discord;

#[cfg(test)]
pub mod fake;
