//! Public listing of all blog posts.

use leptos::prelude::*;

use crate::components::post_card::PostCard;

/// Posts page — fetches the full post list on mount and renders preview
/// cards, with loading and error states.
#[component]
pub fn PostsPage() -> impl IntoView {
    let posts = LocalResource::new(crate::net::post_api::fetch_all);

    view! {
        <div class="posts-page">
            <h1>"All Blog Posts"</h1>
            <Suspense fallback=move || {
                view! { <p class="posts-page__status">"Loading posts..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="posts-page__status">"No posts available yet."</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="posts-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|post| view! { <PostCard post=post/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="posts-page__status posts-page__status--error">
                                        {format!("Error: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
