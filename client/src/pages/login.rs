//! Login page with the demo credential check.
//!
//! The comparison happens entirely client-side against a hardcoded pair —
//! there is no session, token, or backend call. Matching credentials simply
//! navigate to the dashboard shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub(crate) const DEMO_USERNAME: &str = "Admin";
pub(crate) const DEMO_PASSWORD: &str = "Admin@123$";

/// True only for the exact demo credential pair.
#[must_use]
pub fn credentials_valid(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if credentials_valid(&username.get(), &password.get()) {
            navigate("/dashboard", NavigateOptions::default());
        } else {
            notice.set("Invalid username or password.".to_owned());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Login"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access your account."</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Admin"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit">"Login"</button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-notice">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
