//! Top navigation bar with auth-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Fixed navigation bar. Shows Login/Register links when logged out and
/// Dashboard plus a Logout button when a session is active.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let session_links = move || {
        if auth.get().authenticated {
            let navigate = navigate.clone();
            view! {
                <div class="navbar__session">
                    <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                    <button
                        class="btn btn--ghost"
                        on:click=move |_| {
                            auth::logout(auth);
                            navigate("/", NavigateOptions::default());
                        }
                    >
                        "Logout"
                    </button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="navbar__session">
                    <a href="/login" class="navbar__link">"Login"</a>
                    <a href="/register" class="navbar__link">"Register"</a>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"BlogHive"</a>
            <div class="navbar__links">
                <a href="/" class="navbar__link">"Home"</a>
                <a href="/posts" class="navbar__link">"Posts"</a>
                {session_links}
            </div>
        </nav>
    }
}
