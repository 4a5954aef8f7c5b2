//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Channel, User, Message) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_with, create_test_role, create_test_text_channel};
//!
//! #[test]
//! fn snapshot_from_guild() {
//!     let guild = create_test_guild_with(
//!         1,
//!         "Test Guild",
//!         vec![create_test_role(10, "Member", 1)],
//!         vec![create_test_text_channel(20, 1, "verify", 0)],
//!         None,
//!     );
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild_with` - Guilds with roles and channels
//! - `role::create_test_role` - Roles
//! - `channel::create_test_text_channel` / `channel::create_test_channel` - Guild channels
//! - `user::create_test_user` - Users, optionally bots
//! - `message::create_test_message` - Messages with optional button components

pub mod channel;
pub mod guild;
pub mod message;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use channel::{create_test_channel, create_test_text_channel};
pub use guild::create_test_guild_with;
pub use message::create_test_message;
pub use role::create_test_role;
pub use user::create_test_user;
