#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::workspace::WorkspaceState;

/// One entry in the sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavPage {
    pub name: &'static str,
    /// Route template containing the `[id]` workspace placeholder.
    pub href: &'static str,
    pub icon: &'static str,
    /// `None` means always accessible.
    pub accessible: Option<bool>,
}

/// Style variant for a rendered navigation item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItemStyle {
    Current,
    Idle,
}

/// Build the navigation list for a workspace, computing each entry's
/// accessibility from the permission set.
pub fn pages_for(workspace: &WorkspaceState) -> Vec<NavPage> {
    let gated = |name: &str| Some(workspace.has_permission(name));
    vec![
        NavPage {
            name: "Home",
            href: "/workspace/[id]",
            icon: "\u{1F3E0}",
            accessible: None,
        },
        NavPage {
            name: "Wall",
            href: "/workspace/[id]/wall",
            icon: "\u{1F9F1}",
            accessible: None,
        },
        NavPage {
            name: "Activity",
            href: "/workspace/[id]/activity",
            icon: "\u{1F4C2}",
            accessible: gated("view_entire_groups_activity"),
        },
        NavPage {
            name: "Applications",
            href: "/workspace/[id]/career",
            icon: "\u{1F4CB}",
            accessible: gated("manage_applicant"),
        },
        NavPage {
            name: "Staff",
            href: "/workspace/[id]/views",
            icon: "\u{1F465}",
            accessible: gated("view_members"),
        },
        NavPage {
            name: "Sessions",
            href: "/workspace/[id]/sessions",
            icon: "\u{1F4E3}",
            accessible: gated("manage_sessions"),
        },
        NavPage {
            name: "Docs",
            href: "/workspace/[id]/docs",
            icon: "\u{1F4C4}",
            accessible: gated("manage_docs"),
        },
        NavPage {
            name: "Allies",
            href: "/workspace/[id]/allies",
            icon: "\u{1F91D}",
            accessible: None,
        },
        NavPage {
            name: "Settings",
            href: "/workspace/[id]/settings",
            icon: "\u{2699}",
            accessible: gated("admin"),
        },
    ]
}

/// Whether a page should be rendered: accessible is unset or true.
pub fn visible(page: &NavPage) -> bool {
    page.accessible.unwrap_or(true)
}

/// Substitute the workspace id into an href template.
pub fn resolve_href(template: &str, group_id: i64) -> String {
    template.replace("[id]", &group_id.to_string())
}

/// Whether the page is the one currently displayed. Exact path match only.
pub fn is_current(page: &NavPage, current_path: &str, group_id: i64) -> bool {
    resolve_href(page.href, group_id) == current_path
}

/// Select the style variant for a navigation item.
pub fn nav_item_style(page: &NavPage, current_path: &str, group_id: i64) -> NavItemStyle {
    if is_current(page, current_path, group_id) {
        NavItemStyle::Current
    } else {
        NavItemStyle::Idle
    }
}
