//! Server-side bot and panel implementation.
//!
//! This module contains the Discord bot, the configuration panel API and the business
//! logic they share. The panel uses Axum as the web framework and the bot uses
//! Serenity for Discord integration. Nothing is persisted: settings live in memory
//! for the lifetime of the process.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Discord gateway event handlers
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Reconciliation, verification, banner rendering and settings
//! - **Data Layer** (`data/`) - Discord and avatar CDN access behind traits
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared panel state (settings, bot presence, Discord gateway)
//! - **Startup** (`startup`) - Logging, HTTP client and shutdown signal setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Event Flow
//!
//! 1. **Bot** receives a gateway event and snapshots the current settings
//! 2. **Service** resolves roles and channels by name and decides what to do
//! 3. **Data** performs the Discord calls
//! 4. **Bot** logs any error and moves on to the next event
//!
//! A panel settings write follows the same path through `SettingsService`, which
//! reconciles every guild before the HTTP response is sent.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
