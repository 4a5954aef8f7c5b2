//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! bot handlers / panel controllers and the data (gateway) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Role and prompt reconciliation, verification, banner rendering
//! - **Orchestration**: Coordinating multiple Discord calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or serenity types
//! - **Shared State**: Holding the runtime settings and the bot connection state

pub mod banner;
pub mod greeting;
pub mod presence;
pub mod settings;
pub mod verification;

#[cfg(test)]
mod test;
