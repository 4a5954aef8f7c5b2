//! HTTP handlers for the configuration panel.
//!
//! Controllers convert between DTOs and server models and delegate to the service
//! layer. The panel has no authentication; it is meant to be reachable only by the
//! bot's operators.

pub mod settings;
pub mod status;

#[cfg(test)]
mod test;
