//! Login page with a credentials form.

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;

/// Login page — exchanges credentials for a bearer token and establishes
/// the session on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let credentials = LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            error.set(Some("Please fill in all fields".to_owned()));
            return;
        }

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::login(&credentials).await {
                    Ok(resp) => {
                        crate::state::auth::login(auth, &resp.access_token);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-page__card">
                <h1>"Login to Your Account"</h1>
                <p class="login-page__hint">"Enter your credentials to access your account"</p>
                <form class="form" on:submit=submit>
                    <label class="form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="form__input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        prop:disabled=move || busy.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />

                    <label class="form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form__input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        prop:disabled=move || busy.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />

                    {move || {
                        error.get().map(|message| view! { <p class="form__error">{message}</p> })
                    }}

                    <button type="submit" class="btn btn--primary" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>

                    <p class="form__footer">
                        "Don't have an account? " <a href="/register">"Register here"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
