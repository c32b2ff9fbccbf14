//! Top-level routed pages.

pub mod login;
pub mod profile;
pub mod workspace;
