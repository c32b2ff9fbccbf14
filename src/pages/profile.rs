//! Profile page showing a member's inactivity notices.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::notice_list::NoticeList;
use crate::components::sidebar::Sidebar;
use crate::pages::workspace::sync_workspace_with_route;
use crate::state::workspace::WorkspaceState;

/// Profile page — fetches the viewed member's notices for the workspace
/// named in the route.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let params = use_params_map();

    let is_collapsed = RwSignal::new(false);

    sync_workspace_with_route();

    let notices = LocalResource::new(move || {
        let group_id = workspace.get().group_id;
        let user_id = params
            .with(|p| p.get("user_id").and_then(|id| id.parse::<i64>().ok()))
            .unwrap_or_default();
        crate::net::api::fetch_notices(group_id, user_id)
    });

    view! {
        <div class="workspace-page">
            <Sidebar is_collapsed=is_collapsed/>
            <main class="workspace-page__content">
                <Suspense fallback=move || view! { <p>"Loading notices..."</p> }>
                    {move || {
                        notices
                            .get()
                            .map(|fetched| {
                                view! { <NoticeList notices=fetched.unwrap_or_default()/> }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
