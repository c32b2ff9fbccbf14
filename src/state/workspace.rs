#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::net::types::WorkspaceMembership;

/// The workspace the user is currently operating in, plus their permissions
/// within it.
#[derive(Clone, Debug, Default)]
pub struct WorkspaceState {
    pub group_id: i64,
    pub group_name: String,
    pub group_thumbnail: String,
    pub your_permission: Vec<String>,
}

/// Membership the route names when it differs from the active workspace.
///
/// `None` when the route carries no id, the id is already active, or the
/// user has no membership for it; deep links to foreign workspaces are
/// silently ignored.
pub fn membership_for_route(
    session: &crate::state::session::SessionState,
    workspace: &WorkspaceState,
    route_id: Option<i64>,
) -> Option<WorkspaceMembership> {
    let group_id = route_id?;
    if workspace.group_id == group_id {
        return None;
    }
    session.find_membership(group_id).cloned()
}

impl WorkspaceState {
    /// Whether the user holds the named permission in this workspace.
    pub fn has_permission(&self, name: &str) -> bool {
        self.your_permission.iter().any(|p| p == name)
    }

    /// Replace the active workspace with the given membership. Called when
    /// the user switches workspaces from the sidebar picker.
    pub fn adopt(&mut self, membership: &WorkspaceMembership) {
        self.group_id = membership.group_id;
        self.group_name = membership.group_name.clone();
        self.group_thumbnail = membership.group_thumbnail.clone();
        self.your_permission = membership.your_permission.clone();
    }
}
