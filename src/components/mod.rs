//! Reusable UI components.

pub mod notice_list;
pub mod sidebar;
