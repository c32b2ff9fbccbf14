//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, profile::ProfilePage, workspace::WorkspacePage};
use crate::state::session::SessionState;
use crate::state::theme::Theme;
use crate::state::workspace::WorkspaceState;
use crate::util::theme as theme_pref;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let workspace = RwSignal::new(WorkspaceState::default());
    let theme = RwSignal::new(Theme::default());

    provide_context(session);
    provide_context(workspace);
    provide_context(theme);

    // Apply the persisted theme once on the client.
    Effect::new(move || {
        let stored = theme_pref::read_preference();
        theme_pref::apply(stored);
        theme.set(stored);
    });

    // Load the current session; the first membership becomes the active
    // workspace unless one is already set.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_current_user().await {
                let first = user.workspaces.first().cloned();
                session.update(|s| s.apply_user(user));
                if let Some(membership) = first {
                    if workspace.with(|w| w.group_id == 0) {
                        workspace.update(|w| w.adopt(&membership));
                    }
                }
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/crewdeck.css"/>
        <Title text="Crewdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(
                        StaticSegment("workspace"),
                        ParamSegment("id"),
                        StaticSegment("profile"),
                        ParamSegment("user_id"),
                    )
                    view=ProfilePage
                />
                <Route path=(StaticSegment("workspace"), ParamSegment("id")) view=WorkspacePage/>
                <Route
                    path=(StaticSegment("workspace"), ParamSegment("id"), ParamSegment("section"))
                    view=WorkspacePage
                />
            </Routes>
        </Router>
    }
}
