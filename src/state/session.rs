#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{SessionUser, WorkspaceMembership};

/// Login session for the current user, including workspace memberships.
///
/// `Default` is the anonymous session the client starts with and returns to
/// on logout.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user_id: i64,
    pub username: String,
    pub displayname: String,
    pub thumbnail: String,
    pub workspaces: Vec<WorkspaceMembership>,
    pub can_make_workspace: bool,
    pub is_owner: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user_id: 1,
            username: String::new(),
            displayname: String::new(),
            thumbnail: String::new(),
            workspaces: Vec::new(),
            can_make_workspace: false,
            is_owner: false,
        }
    }
}

impl SessionState {
    /// Restore the anonymous defaults. Used on logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overwrite the session from a freshly fetched user payload.
    pub fn apply_user(&mut self, user: SessionUser) {
        self.user_id = user.user_id;
        self.username = user.username;
        self.displayname = user.displayname;
        self.thumbnail = user.thumbnail;
        self.workspaces = user.workspaces;
        self.can_make_workspace = user.can_make_workspace;
        self.is_owner = user.is_owner;
    }

    /// Look up a workspace membership by group id.
    pub fn find_membership(&self, group_id: i64) -> Option<&WorkspaceMembership> {
        self.workspaces.iter().find(|ws| ws.group_id == group_id)
    }
}
