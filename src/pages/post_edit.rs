//! Post editing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::error::ApiError;
use crate::net::post_api;
use crate::net::types::{CreatePostRequest, Post};
use crate::state::auth::AuthState;

/// Edit-post page — seeds the form from the fetched post and only lets
/// the author submit changes. Redirects to `/login` when no session is
/// active.
#[component]
pub fn EditPostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    Effect::new(move || {
        if !auth.get().authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let post_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(None::<Post>);

    let source = LocalResource::new(move || {
        let id = post_id();
        async move {
            let id = id.ok_or_else(|| ApiError::Server("Invalid post ID".to_owned()))?;
            post_api::fetch_by_id(id).await
        }
    });

    // Seed the form once the post arrives.
    Effect::new(move || match source.get() {
        Some(Ok(post)) => {
            title.set(post.title.clone());
            content.set(post.content.clone());
            let viewer = auth.get_untracked().user.and_then(|user| user.id);
            if viewer.is_some_and(|id| id != post.author_id) {
                error.set(Some("You are not authorized to edit this post".to_owned()));
            }
            loaded.set(Some(post));
        }
        Some(Err(err)) => error.set(Some(err.to_string())),
        None => {}
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let request = CreatePostRequest {
            title: title.get().trim().to_owned(),
            content: content.get().trim().to_owned(),
        };
        if request.title.is_empty() || request.content.is_empty() {
            error.set(Some("Please fill in all fields".to_owned()));
            return;
        }

        // Only the author may save; a stale identity (no id claim) also
        // fails here and is prompted to re-login elsewhere.
        let viewer = auth.get().user.and_then(|user| user.id);
        let Some(post) = loaded.get() else {
            error.set(Some("You are not authorized to edit this post".to_owned()));
            return;
        };
        if viewer != Some(post.author_id) {
            error.set(Some("You are not authorized to edit this post".to_owned()));
            return;
        }

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = crate::session::store::get() else {
                    error.set(Some(
                        "No authentication token found. Please log in.".to_owned(),
                    ));
                    busy.set(false);
                    return;
                };
                match post_api::update(post.id, &request, &token).await {
                    Ok(updated) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&format!("/posts/{}", updated.id));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&request, &post);
            busy.set(false);
        }
    };

    view! {
        <div class="editor-page">
            <div class="card editor-page__card">
                <h1>"Edit Post"</h1>
                <Show
                    when=move || source.get().is_some()
                    fallback=|| view! { <p class="editor-page__status">"Loading post..."</p> }
                >
                    <form class="form" on:submit=submit>
                        <label class="form__label" for="title">"Title"</label>
                        <input
                            id="title"
                            class="form__input"
                            type="text"
                            prop:value=move || title.get()
                            prop:disabled=move || busy.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />

                        <label class="form__label" for="content">"Content"</label>
                        <textarea
                            id="content"
                            class="form__textarea"
                            rows="12"
                            prop:value=move || content.get()
                            prop:disabled=move || busy.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>

                        {move || {
                            error.get().map(|message| view! { <p class="form__error">{message}</p> })
                        }}

                        <button
                            type="submit"
                            class="btn btn--primary"
                            prop:disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
