//! Gatekeeper Test Utils
//!
//! Provides shared testing utilities for the gatekeeper bot. The crate offers factories
//! that build Serenity model objects from Discord-shaped JSON, so conversion code and
//! services can be exercised without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[test]
//! fn detects_bot_authors() {
//!     let bot = create_test_user(1, "gatekeeper", None, true);
//!     let message = create_test_message(10, 20, 1, "Press to verify", &["verify_btn"]);
//!     // ...
//! }
//! ```

pub mod serenity;
