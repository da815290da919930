//! Post detail page with the comment thread.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;
use crate::net::types::{Comment, CreateCommentRequest, Post};
use crate::net::{comment_api, post_api};
use crate::state::auth::AuthState;
use crate::util::html;

/// Post detail page — renders the post body and its comment thread.
/// Authenticated users can add comments and delete their own.
#[component]
pub fn PostDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let post_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let detail = LocalResource::new(move || {
        let id = post_id();
        async move {
            let id = id.ok_or_else(|| ApiError::Server("Invalid post ID".to_owned()))?;
            let post = post_api::fetch_by_id(id).await?;
            let comments = comment_api::fetch_for_post(id).await?;
            Ok::<(Post, Vec<Comment>), ApiError>((post, comments))
        }
    });

    // Comments live in their own signal so a new comment can be appended
    // without refetching the post.
    let comments = RwSignal::new(Vec::<Comment>::new());
    Effect::new(move || {
        if let Some(Ok((_, thread))) = detail.get() {
            comments.set(thread);
        }
    });

    let comment_content = RwSignal::new(String::new());
    let comment_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let content = comment_content.get();
        if content.trim().is_empty() {
            comment_error.set(Some("Comment cannot be empty".to_owned()));
            return;
        }
        let Some(id) = post_id() else {
            comment_error.set(Some("Invalid post ID".to_owned()));
            return;
        };

        let request = CreateCommentRequest {
            post_id: id,
            content: content.trim().to_owned(),
        };

        comment_error.set(None);
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let Some(token) = crate::session::store::get() else {
                    // The token vanished under us; go log in again.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                    return;
                };
                match comment_api::create(&request, &token).await {
                    Ok(comment) => {
                        comments.update(|thread| thread.push(comment));
                        comment_content.set(String::new());
                    }
                    Err(err) => comment_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &request;
            submitting.set(false);
        }
    };

    let delete_comment = move |comment_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = crate::session::store::get() else {
                return;
            };
            if comment_api::delete(comment_id, &token).await.is_ok() {
                comments.update(|thread| thread.retain(|c| c.id != comment_id));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = comment_id;
    };

    view! {
        <div class="post-page">
            <Suspense fallback=move || {
                view! { <p class="post-page__status">"Loading post..."</p> }
            }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok((post, _)) => {
                                let byline = format!(
                                    "By Author {} \u{2022} {}",
                                    post.author_id,
                                    html::date_only(&post.created_at),
                                );
                                view! {
                                    <article class="post-page__article">
                                        <h1>{post.title}</h1>
                                        <p class="post-page__byline">{byline}</p>
                                        <div class="post-page__content" inner_html=post.content></div>
                                    </article>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="post-page__status post-page__status--error">
                                        {format!("Error: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="post-page__comments">
                <h2>{move || format!("Comments ({})", comments.get().len())}</h2>

                {move || {
                    if auth.get().authenticated {
                        view! {
                            <form class="form post-page__comment-form" on:submit=submit_comment>
                                <textarea
                                    class="form__textarea"
                                    rows="4"
                                    placeholder="Write your comment here..."
                                    prop:value=move || comment_content.get()
                                    prop:disabled=move || submitting.get()
                                    on:input=move |ev| {
                                        comment_content.set(event_target_value(&ev));
                                        comment_error.set(None);
                                    }
                                ></textarea>
                                {move || {
                                    comment_error
                                        .get()
                                        .map(|message| view! { <p class="form__error">{message}</p> })
                                }}
                                <button
                                    type="submit"
                                    class="btn btn--primary"
                                    prop:disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() { "Posting..." } else { "Post Comment" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="post-page__login-hint">
                                "Please " <a href="/login">"log in"</a> " to add a comment."
                            </p>
                        }
                            .into_any()
                    }
                }}

                {move || {
                    let thread = comments.get();
                    if thread.is_empty() {
                        view! {
                            <p class="post-page__status">
                                "No comments yet. Be the first to comment!"
                            </p>
                        }
                            .into_any()
                    } else {
                        let viewer_id = auth.get().user.as_ref().and_then(|user| user.id);
                        view! {
                            <div class="post-page__comment-list">
                                {thread
                                    .into_iter()
                                    .map(|comment| {
                                        let mine = viewer_id
                                            .is_some_and(|id| id == comment.user_id);
                                        let comment_id = comment.id;
                                        let meta = format!(
                                            "User {} \u{2022} {}",
                                            comment.user_id,
                                            html::date_only(&comment.created_at),
                                        );
                                        view! {
                                            <div class="comment-card">
                                                <p class="comment-card__meta">{meta}</p>
                                                <p class="comment-card__content">{comment.content}</p>
                                                {mine
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="btn btn--ghost comment-card__delete"
                                                                on:click=move |_| delete_comment(comment_id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        }
                                                    })}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
