//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, post_detail::PostDetailPage,
    post_edit::EditPostPage, post_new::NewPostPage, posts::PostsPage, register::RegisterPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// session is restored from persistent storage once the client mounts;
/// until then consumers see the logged-out default.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Restore any persisted session on mount (browser only).
    Effect::new(move || {
        auth.set(AuthState::from_storage());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bloghive-ui.css"/>
        <Title text="BlogHive"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("posts") view=PostsPage/>
                <Route path=(StaticSegment("posts"), StaticSegment("new")) view=NewPostPage/>
                <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostDetailPage/>
                <Route
                    path=(StaticSegment("posts"), ParamSegment("id"), StaticSegment("edit"))
                    view=EditPostPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
