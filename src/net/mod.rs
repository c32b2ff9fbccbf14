//! Wire types and REST helpers for the Crewdeck API.

pub mod api;
pub mod types;
