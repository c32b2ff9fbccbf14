//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `workspace`, `theme`, `nav`) so
//! individual components can depend on small focused models. Each model is a
//! plain struct stored in an `RwSignal` provided via context from the root
//! `App` component.

pub mod nav;
pub mod session;
pub mod theme;
pub mod workspace;
