//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Serenity
//! objects are converted into these types at the gateway boundary and settings are
//! converted to DTOs at the controller boundary, keeping business logic independent
//! of both the Discord SDK and the panel's wire format.

pub mod banner;
pub mod guild;
pub mod member;
pub mod settings;
pub mod verification;
