//! Data transfer objects exchanged with the configuration panel.
//!
//! These types define the JSON shapes of the panel API. They are kept apart from the
//! server-side domain models so the wire format can stay stable while the domain evolves.

pub mod api;
pub mod settings;
pub mod status;
