use super::*;

fn workspace_with(permissions: &[&str]) -> WorkspaceState {
    WorkspaceState {
        group_id: 42,
        group_name: "Alpha".to_owned(),
        group_thumbnail: String::new(),
        your_permission: permissions.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn find<'a>(pages: &'a [NavPage], name: &str) -> &'a NavPage {
    pages.iter().find(|p| p.name == name).unwrap()
}

// =============================================================
// Page list shape
// =============================================================

#[test]
fn pages_are_declared_in_fixed_order() {
    let pages = pages_for(&workspace_with(&[]));
    let names: Vec<&str> = pages.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        [
            "Home",
            "Wall",
            "Activity",
            "Applications",
            "Staff",
            "Sessions",
            "Docs",
            "Allies",
            "Settings",
        ]
    );
}

#[test]
fn ungated_pages_have_no_accessibility_flag() {
    let pages = pages_for(&workspace_with(&[]));
    for name in ["Home", "Wall", "Allies"] {
        assert_eq!(find(&pages, name).accessible, None, "{name}");
    }
}

// =============================================================
// Permission filtering
// =============================================================

#[test]
fn visible_accepts_unset_and_true_only() {
    let page = NavPage {
        name: "X",
        href: "/workspace/[id]/x",
        icon: "",
        accessible: None,
    };
    assert!(visible(&page));
    assert!(visible(&NavPage { accessible: Some(true), ..page }));
    assert!(!visible(&NavPage { accessible: Some(false), ..page }));
}

#[test]
fn admin_and_view_members_hide_sessions_and_docs() {
    let pages = pages_for(&workspace_with(&["admin", "view_members"]));
    let shown: Vec<&str> = pages.iter().filter(|p| visible(p)).map(|p| p.name).collect();
    assert!(shown.contains(&"Staff"));
    assert!(shown.contains(&"Settings"));
    assert!(!shown.contains(&"Sessions"));
    assert!(!shown.contains(&"Docs"));
}

#[test]
fn filtering_preserves_declared_order() {
    let pages = pages_for(&workspace_with(&["manage_docs"]));
    let shown: Vec<&str> = pages.iter().filter(|p| visible(p)).map(|p| p.name).collect();
    assert_eq!(shown, ["Home", "Wall", "Docs", "Allies"]);
}

#[test]
fn no_permissions_shows_only_ungated_pages() {
    let pages = pages_for(&workspace_with(&[]));
    let shown: Vec<&str> = pages.iter().filter(|p| visible(p)).map(|p| p.name).collect();
    assert_eq!(shown, ["Home", "Wall", "Allies"]);
}

// =============================================================
// Href resolution and current-page detection
// =============================================================

#[test]
fn resolve_href_substitutes_group_id() {
    assert_eq!(resolve_href("/workspace/[id]/wall", 42), "/workspace/42/wall");
    assert_eq!(resolve_href("/workspace/[id]", 7), "/workspace/7");
}

#[test]
fn wall_is_current_on_its_own_route_only() {
    let pages = pages_for(&workspace_with(&["admin"]));
    let current: Vec<&str> = pages
        .iter()
        .filter(|p| is_current(p, "/workspace/42/wall", 42))
        .map(|p| p.name)
        .collect();
    assert_eq!(current, ["Wall"]);
}

#[test]
fn current_requires_matching_group_id() {
    let pages = pages_for(&workspace_with(&[]));
    let wall = find(&pages, "Wall");
    assert!(!is_current(wall, "/workspace/42/wall", 43));
}

#[test]
fn nav_item_style_maps_current_and_idle() {
    let pages = pages_for(&workspace_with(&[]));
    let wall = find(&pages, "Wall");
    assert_eq!(nav_item_style(wall, "/workspace/42/wall", 42), NavItemStyle::Current);
    assert_eq!(nav_item_style(wall, "/workspace/42", 42), NavItemStyle::Idle);
}
