use super::*;

// =============================================================
// Permission checks
// =============================================================

#[test]
fn has_permission_hits_on_exact_name() {
    let state = WorkspaceState {
        your_permission: vec!["admin".to_owned(), "view_members".to_owned()],
        ..WorkspaceState::default()
    };
    assert!(state.has_permission("admin"));
    assert!(state.has_permission("view_members"));
}

#[test]
fn has_permission_misses_on_absent_name() {
    let state = WorkspaceState {
        your_permission: vec!["view_members".to_owned()],
        ..WorkspaceState::default()
    };
    assert!(!state.has_permission("manage_sessions"));
}

#[test]
fn has_permission_on_empty_set_is_false() {
    let state = WorkspaceState::default();
    assert!(!state.has_permission("admin"));
}

// =============================================================
// Route-driven workspace sync
// =============================================================

fn session_with_memberships() -> crate::state::session::SessionState {
    crate::state::session::SessionState {
        workspaces: vec![
            crate::net::types::WorkspaceMembership {
                group_id: 5,
                group_name: "Alpha".to_owned(),
                group_thumbnail: "/thumbs/5.png".to_owned(),
                your_permission: vec![],
            },
            crate::net::types::WorkspaceMembership {
                group_id: 42,
                group_name: "Beta".to_owned(),
                group_thumbnail: "/thumbs/42.png".to_owned(),
                your_permission: vec!["admin".to_owned()],
            },
        ],
        ..crate::state::session::SessionState::default()
    }
}

#[test]
fn route_naming_another_membership_yields_it() {
    let session = session_with_memberships();
    let active = WorkspaceState {
        group_id: 5,
        ..WorkspaceState::default()
    };
    let found = membership_for_route(&session, &active, Some(42));
    assert_eq!(found.map(|m| m.group_name), Some("Beta".to_owned()));
}

#[test]
fn route_naming_active_workspace_is_ignored() {
    let session = session_with_memberships();
    let active = WorkspaceState {
        group_id: 42,
        ..WorkspaceState::default()
    };
    assert!(membership_for_route(&session, &active, Some(42)).is_none());
}

#[test]
fn route_naming_foreign_workspace_is_ignored() {
    let session = session_with_memberships();
    let active = WorkspaceState {
        group_id: 5,
        ..WorkspaceState::default()
    };
    assert!(membership_for_route(&session, &active, Some(99)).is_none());
}

#[test]
fn route_without_id_is_ignored() {
    let session = session_with_memberships();
    let active = WorkspaceState::default();
    assert!(membership_for_route(&session, &active, None).is_none());
}

// =============================================================
// Workspace switching
// =============================================================

#[test]
fn adopt_replaces_all_fields() {
    let mut state = WorkspaceState {
        group_id: 5,
        group_name: "Alpha".to_owned(),
        group_thumbnail: "/thumbs/5.png".to_owned(),
        your_permission: vec!["admin".to_owned()],
    };
    let membership = crate::net::types::WorkspaceMembership {
        group_id: 9,
        group_name: "Beta".to_owned(),
        group_thumbnail: "/thumbs/9.png".to_owned(),
        your_permission: vec!["view_members".to_owned()],
    };
    state.adopt(&membership);
    assert_eq!(state.group_id, 9);
    assert_eq!(state.group_name, "Beta");
    assert_eq!(state.group_thumbnail, "/thumbs/9.png");
    assert_eq!(state.your_permission, vec!["view_members".to_owned()]);
}
