//! Reusable card component for post list entries.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::html;

/// A clickable card summarizing a post, linking to its detail page.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/posts/{}", post.id);
    let byline = format!(
        "By Author {} \u{2022} {}",
        post.author_id,
        html::date_only(&post.created_at)
    );
    let excerpt = html::preview(&post.content, 150);

    view! {
        <a class="post-card" href=href>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__byline">{byline}</p>
            <p class="post-card__excerpt">{excerpt}</p>
        </a>
    }
}
