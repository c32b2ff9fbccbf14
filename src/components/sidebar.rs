//! Collapsible navigation sidebar with workspace switching, theme toggle,
//! and account menu.
//!
//! Collapse state is owned by the parent page and passed down as a signal.
//! The mobile overlay mode is local state; while it is open the body scroll
//! lock is held, and it is released on close and on unmount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::nav::{self, NavItemStyle};
use crate::state::session::SessionState;
use crate::state::theme::Theme;
use crate::state::workspace::WorkspaceState;
use crate::util::{scroll_lock, theme as theme_pref};

/// Primary navigation sidebar.
#[component]
pub fn Sidebar(is_collapsed: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let is_mobile_menu_open = RwSignal::new(false);
    let picker_open = RwSignal::new(false);
    let account_open = RwSignal::new(false);

    // The scroll lock follows the mobile menu and is always released on
    // unmount, even if the menu was left open.
    Effect::new(move || scroll_lock::set(is_mobile_menu_open.get()));
    on_cleanup(|| scroll_lock::set(false));

    let toggle_collapse = move |_| is_collapsed.update(|c| *c = !*c);
    let toggle_mobile = move |_| is_mobile_menu_open.update(|open| *open = !*open);

    let toggle_theme = move |_| {
        // Persisting and updating the shared signal happen together.
        let next = theme_pref::toggle(theme.get());
        theme.set(next);
    };

    // Switch to a workspace from the membership list. An id with no matching
    // membership is ignored.
    let select_workspace = {
        let navigate = navigate.clone();
        Callback::new(move |group_id: i64| {
            if let Some(membership) = session.with(|s| s.find_membership(group_id).cloned()) {
                workspace.update(|w| w.adopt(&membership));
                navigate(&format!("/workspace/{group_id}"), NavigateOptions::default());
            }
            picker_open.set(false);
        })
    };

    let on_view_profile = {
        let navigate = navigate.clone();
        move |_| {
            let group_id = workspace.get().group_id;
            let user_id = session.get().user_id;
            account_open.set(false);
            navigate(
                &format!("/workspace/{group_id}/profile/{user_id}"),
                NavigateOptions::default(),
            );
        }
    };

    let on_logout = {
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        move |_| {
            account_open.set(false);
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    // Response is ignored: the local session is reset and the
                    // user is sent to login whether or not the call succeeded.
                    crate::net::api::logout().await;
                    session.update(SessionState::reset);
                    navigate("/login", NavigateOptions::default());
                });
            }
        }
    };

    let workspace_options = move || {
        let active_id = workspace.get().group_id;
        session
            .get()
            .workspaces
            .into_iter()
            .map(|ws| {
                let group_id = ws.group_id;
                let thumbnail = thumbnail_or(&ws.group_thumbnail, "/placeholder.svg");
                let selected = group_id == active_id;
                view! {
                    <button
                        class="sidebar__picker-option"
                        class:sidebar__picker-option--selected=move || selected
                        on:click=move |_| select_workspace.run(group_id)
                    >
                        <img class="sidebar__picker-thumb" src=thumbnail alt=""/>
                        <span class="sidebar__picker-name">{ws.group_name}</span>
                        <Show when=move || selected>
                            <span class="sidebar__picker-check">"\u{2713}"</span>
                        </Show>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let nav_items = {
        let navigate = navigate.clone();
        move || {
            let ws = workspace.get();
            let current = pathname.get();
            nav::pages_for(&ws)
                .into_iter()
                .filter(nav::visible)
                .map(|page| {
                    let href = nav::resolve_href(page.href, ws.group_id);
                    let class = match nav::nav_item_style(&page, &current, ws.group_id) {
                        NavItemStyle::Current => "sidebar__nav-item sidebar__nav-item--current",
                        NavItemStyle::Idle => "sidebar__nav-item",
                    };
                    let navigate = navigate.clone();
                    view! {
                        <button
                            class=class
                            on:click=move |_| {
                                navigate(&href, NavigateOptions::default());
                                is_mobile_menu_open.set(false);
                            }
                        >
                            <span class="sidebar__nav-icon">{page.icon}</span>
                            <Show when=move || !is_collapsed.get()>
                                <span class="sidebar__nav-label">{page.name}</span>
                            </Show>
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    view! {
        <button class="sidebar__mobile-toggle" on:click=toggle_mobile title="Menu">
            "\u{2630}"
        </button>

        <Show when=move || is_mobile_menu_open.get()>
            <div class="sidebar__overlay" on:click=move |_| is_mobile_menu_open.set(false)></div>
        </Show>

        <aside
            class="sidebar"
            class:sidebar--collapsed=move || is_collapsed.get()
            class:sidebar--open=move || is_mobile_menu_open.get()
        >
            <button class="sidebar__collapse" on:click=toggle_collapse>
                <Show when=move || !is_collapsed.get()>
                    <span class="sidebar__collapse-label">"Collapse menu"</span>
                </Show>
                <span class="sidebar__collapse-chevron">
                    {move || if is_collapsed.get() { "\u{25B6}" } else { "\u{25C0}" }}
                </span>
            </button>

            <div class="sidebar__picker">
                <button
                    class="sidebar__picker-button"
                    on:click=move |_| picker_open.update(|open| *open = !*open)
                >
                    <img
                        class="sidebar__picker-thumb"
                        src=move || thumbnail_or(&workspace.get().group_thumbnail, "/favicon-32x32.png")
                        alt=""
                    />
                    <Show when=move || !is_collapsed.get()>
                        <span class="sidebar__picker-text">
                            <span class="sidebar__picker-name">
                                {move || workspace.get().group_name}
                            </span>
                            <span class="sidebar__picker-hint">"Switch workspace"</span>
                        </span>
                        <span class="sidebar__picker-chevron">"\u{25BE}"</span>
                    </Show>
                </button>
                <Show when=move || picker_open.get()>
                    <div class="sidebar__picker-options">{workspace_options}</div>
                </Show>
            </div>

            <nav class="sidebar__nav">{nav_items}</nav>

            <div class="sidebar__footer">
                <button class="sidebar__theme" on:click=toggle_theme>
                    <span class="sidebar__theme-icon">
                        {move || if theme.get() == Theme::Dark { "\u{2600}" } else { "\u{263E}" }}
                    </span>
                    <Show when=move || !is_collapsed.get()>
                        <span class="sidebar__theme-label">
                            {move || if theme.get() == Theme::Dark { "Light Mode" } else { "Dark Mode" }}
                        </span>
                    </Show>
                </button>

                <div class="sidebar__account">
                    <button
                        class="sidebar__account-button"
                        on:click=move |_| account_open.update(|open| *open = !*open)
                    >
                        <img
                            class="sidebar__account-thumb"
                            src=move || thumbnail_or(&session.get().thumbnail, "/placeholder.svg")
                            alt=""
                        />
                        <Show when=move || !is_collapsed.get()>
                            <span class="sidebar__account-text">
                                <span class="sidebar__account-name">
                                    {move || session.get().displayname}
                                </span>
                                <span class="sidebar__account-hint">"Manage account"</span>
                            </span>
                        </Show>
                    </button>
                    <Show when=move || account_open.get()>
                        <div class="sidebar__account-menu">
                            <button class="sidebar__account-item" on:click=on_view_profile.clone()>
                                "View Profile"
                            </button>
                            <button
                                class="sidebar__account-item sidebar__account-item--danger"
                                on:click=on_logout.clone()
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </aside>
    }
}

fn thumbnail_or(thumbnail: &str, fallback: &str) -> String {
    if thumbnail.is_empty() {
        fallback.to_owned()
    } else {
        thumbnail.to_owned()
    }
}
