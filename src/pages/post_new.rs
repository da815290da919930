//! Post creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::CreatePostRequest;
use crate::state::auth::AuthState;

/// New-post page — a title/content form for authenticated users.
/// Redirects to `/login` when no session is active.
#[component]
pub fn NewPostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Writing requires a session.
    Effect::new(move || {
        if !auth.get().authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

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
                match crate::net::post_api::create(&request, &token).await {
                    Ok(_) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/posts");
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &request;
            busy.set(false);
        }
    };

    view! {
        <div class="editor-page">
            <div class="card editor-page__card">
                <h1>"Create New Post"</h1>
                <form class="form" on:submit=submit>
                    <label class="form__label" for="title">"Title"</label>
                    <input
                        id="title"
                        class="form__input"
                        type="text"
                        placeholder="Post title"
                        prop:value=move || title.get()
                        prop:disabled=move || busy.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />

                    <label class="form__label" for="content">"Content"</label>
                    <textarea
                        id="content"
                        class="form__textarea"
                        rows="12"
                        placeholder="Write your post content..."
                        prop:value=move || content.get()
                        prop:disabled=move || busy.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>

                    {move || {
                        error.get().map(|message| view! { <p class="form__error">{message}</p> })
                    }}

                    <button type="submit" class="btn btn--primary" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Post" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
