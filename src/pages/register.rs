//! Registration page.

use leptos::prelude::*;

use crate::net::types::RegisterRequest;

/// Registration page — creates an account and sends the user to the
/// login page on success.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let account = RegisterRequest {
            username: username.get(),
            password: password.get(),
        };
        if account.username.is_empty() || account.password.is_empty() || confirm.get().is_empty() {
            error.set(Some("Please fill in all fields".to_owned()));
            return;
        }
        if account.password != confirm.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        if account.password.len() < 6 {
            error.set(Some("Password must be at least 6 characters".to_owned()));
            return;
        }

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::register(&account).await {
                    Ok(_) => navigate("/login", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &account;
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="card register-page__card">
                <h1>"Create an Account"</h1>
                <p class="register-page__hint">"Sign up to start writing and commenting"</p>
                <form class="form" on:submit=submit>
                    <label class="form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="form__input"
                        type="text"
                        placeholder="Choose a username"
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
                        placeholder="Choose a password"
                        prop:value=move || password.get()
                        prop:disabled=move || busy.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />

                    <label class="form__label" for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        class="form__input"
                        type="password"
                        placeholder="Repeat your password"
                        prop:value=move || confirm.get()
                        prop:disabled=move || busy.get()
                        on:input=move |ev| {
                            confirm.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />

                    {move || {
                        error.get().map(|message| view! { <p class="form__error">{message}</p> })
                    }}

                    <button type="submit" class="btn btn--primary" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>

                    <p class="form__footer">
                        "Already have an account? " <a href="/login">"Login here"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
