//! Workspace page hosting the sidebar and the active section.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;
use crate::state::workspace::{WorkspaceState, membership_for_route};

/// Keep the active workspace in sync with the route's `:id` param. A deep
/// link to a workspace the user is not a member of leaves the state
/// untouched. Registered by every page that renders under `/workspace/:id`.
pub(crate) fn sync_workspace_with_route() {
    let session = expect_context::<RwSignal<SessionState>>();
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let params = use_params_map();

    Effect::new(move || {
        let route_id = params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));
        let membership =
            session.with(|s| workspace.with(|w| membership_for_route(s, w, route_id)));
        if let Some(membership) = membership {
            workspace.update(|w| w.adopt(&membership));
        }
    });
}

/// Workspace page — owns the sidebar collapse state and renders the section
/// named in the route.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let params = use_params_map();

    let is_collapsed = RwSignal::new(false);

    sync_workspace_with_route();

    let section = move || params.with(|p| p.get("section").unwrap_or_default());

    view! {
        <div class="workspace-page">
            <Sidebar is_collapsed=is_collapsed/>
            <main class="workspace-page__content">
                {move || {
                    let name = workspace.get().group_name;
                    match section().as_str() {
                        "" => view! { <SectionStub title="Home" subtitle=name/> }.into_any(),
                        "wall" => view! { <SectionStub title="Wall" subtitle=name/> }.into_any(),
                        "activity" => view! { <SectionStub title="Activity" subtitle=name/> }.into_any(),
                        "career" => view! { <SectionStub title="Applications" subtitle=name/> }.into_any(),
                        "views" => view! { <SectionStub title="Staff" subtitle=name/> }.into_any(),
                        "sessions" => view! { <SectionStub title="Sessions" subtitle=name/> }.into_any(),
                        "docs" => view! { <SectionStub title="Docs" subtitle=name/> }.into_any(),
                        "allies" => view! { <SectionStub title="Allies" subtitle=name/> }.into_any(),
                        "settings" => view! { <SectionStub title="Settings" subtitle=name/> }.into_any(),
                        _ => view! { <p class="workspace-page__missing">"Page not found."</p> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}

/// Placeholder body for a workspace section.
#[component]
fn SectionStub(title: &'static str, subtitle: String) -> impl IntoView {
    view! {
        <header class="workspace-page__header">
            <h1>{title}</h1>
            <p class="workspace-page__subtitle">{subtitle}</p>
        </header>
    }
}
