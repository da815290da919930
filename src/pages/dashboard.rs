//! Dashboard page listing the signed-in user's posts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::post_api;
use crate::net::types::Post;
use crate::session::store;
use crate::state::auth::{self, AuthState};
use crate::util::html;

/// Dashboard page — shows the current user's posts with view/edit/delete
/// actions. Redirects to `/login` when no session is active; a stale
/// identity (token without a `userId` claim) gets a re-login prompt
/// instead of a fetch that can only fail.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if !auth.get().authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let my_posts = LocalResource::new(move || {
        let author_id = auth.get().user.as_ref().and_then(|user| user.id);
        async move {
            let (Some(author_id), Some(token)) = (author_id, store::get()) else {
                return Ok(Vec::new());
            };
            post_api::fetch_by_author(author_id, &token).await
        }
    });

    let posts = RwSignal::new(Vec::<Post>::new());
    let error = RwSignal::new(None::<String>);
    Effect::new(move || match my_posts.get() {
        Some(Ok(list)) => posts.set(list),
        Some(Err(err)) => error.set(Some(err.to_string())),
        None => {}
    });

    let logout_and_login = move |_| {
        auth::logout(auth);
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    let delete_post = move |post_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = store::get() else {
                return;
            };
            match post_api::delete(post_id, &token).await {
                Ok(()) => posts.update(|list| list.retain(|post| post.id != post_id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = post_id;
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>
                    {move || {
                        auth.get()
                            .user
                            .map_or_else(
                                || "Welcome back!".to_owned(),
                                |user| format!("Welcome back, {}!", user.username),
                            )
                    }}
                </h1>
                <p>"Here's an overview of your blog posts and activity."</p>
            </header>

            <a href="/posts/new" class="btn btn--primary dashboard-page__create">
                "+ Create New Post"
            </a>

            <section class="dashboard-page__posts">
                <h2>"Your Blog Posts"</h2>
                {move || {
                    if auth.get().stale_identity() {
                        view! {
                            <div class="dashboard-page__stale">
                                <p class="dashboard-page__error">
                                    "Your session is outdated. Please log out and log back in to continue."
                                </p>
                                <button class="btn btn--primary" on:click=logout_and_login>
                                    "Log Out and Login Again"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else if let Some(message) = error.get() {
                        view! {
                            <p class="dashboard-page__error">{format!("Error: {message}")}</p>
                        }
                            .into_any()
                    } else if my_posts.get().is_none() {
                        view! {
                            <p class="dashboard-page__status">"Loading your posts..."</p>
                        }
                            .into_any()
                    } else {
                        let list = posts.get();
                        if list.is_empty() {
                            view! {
                                <div class="dashboard-page__empty">
                                    <p>"You haven't created any posts yet."</p>
                                    <a href="/posts/new" class="btn">"Create Your First Post"</a>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="dashboard-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|post| {
                                            let post_id = post.id;
                                            let excerpt = html::preview(&post.content, 150);
                                            let created = format!(
                                                "Created on {}",
                                                html::date_only(&post.created_at),
                                            );
                                            let updated = (post.updated_at != post.created_at)
                                                .then(|| format!(
                                                    " \u{2022} Updated on {}",
                                                    html::date_only(&post.updated_at),
                                                ));
                                            view! {
                                                <div class="dashboard-page__card">
                                                    <h3>{post.title}</h3>
                                                    <p class="dashboard-page__meta">{created}{updated}</p>
                                                    <p class="dashboard-page__excerpt">{excerpt}</p>
                                                    <div class="dashboard-page__actions">
                                                        <a href=format!("/posts/{post_id}") class="btn btn--small">
                                                            "View"
                                                        </a>
                                                        <a
                                                            href=format!("/posts/{post_id}/edit")
                                                            class="btn btn--small"
                                                        >
                                                            "Edit"
                                                        </a>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| delete_post(post_id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </section>
        </div>
    }
}
