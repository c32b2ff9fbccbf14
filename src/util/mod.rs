//! Browser glue (theme persistence, scroll locking) and small pure helpers.

pub mod dates;
pub mod scroll_lock;
pub mod theme;
