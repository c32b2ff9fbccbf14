//! Login page with a sign-in redirect button.

use leptos::prelude::*;

/// Login page — clicking the button navigates to the auth endpoint.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Crewdeck"</h1>
            <p>"Workspace management for your group"</p>
            <a href="/api/auth/login" class="login-button">
                "Sign in"
            </a>
        </div>
    }
}
