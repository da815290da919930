//! Landing page with a hero section and featured-post placeholders.

use leptos::prelude::*;

/// Landing page shown at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    let featured = [
        (
            "Getting Started with Microservices",
            "John Doe",
            "Learn how a gateway, an auth service, and per-domain services fit together behind a single front-end.",
        ),
        (
            "Writing for the Web",
            "Jane Smith",
            "Structure posts readers actually finish: short paragraphs, clear headings, and one idea at a time.",
        ),
        (
            "Growing a Community Blog",
            "Alex Johnson",
            "Comments turn readers into regulars. Tips for keeping discussion threads welcoming and on topic.",
        ),
    ];

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to BlogHive"</h1>
                <p>"Share your ideas with the world. Read, write, and discuss."</p>
                <div class="home-page__actions">
                    <a href="/posts" class="btn btn--primary">"Browse Posts"</a>
                    <a href="/register" class="btn">"Get Started"</a>
                </div>
            </section>

            <section class="home-page__featured">
                <h2>"Featured Posts"</h2>
                <div class="home-page__cards">
                    {featured
                        .into_iter()
                        .map(|(title, author, blurb)| {
                            view! {
                                <div class="home-page__card">
                                    <h3>{title}</h3>
                                    <p class="home-page__card-author">{format!("By {author}")}</p>
                                    <p>{blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <footer class="home-page__footer">
                <p>"© 2025 BlogHive. All rights reserved."</p>
            </footer>
        </div>
    }
}
