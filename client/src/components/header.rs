//! Top navigation header for the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Brand link, page navigation with active-route highlighting, and sign out.
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let home_active = move || location.pathname.get() == "/";
    let dashboard_active = move || location.pathname.get() == "/dashboard";

    view! {
        <header class="header">
            <div class="header__left">
                <a href="/" class="header__brand">"RegIQ"</a>
                <nav class="header__nav">
                    <a href="/" class="header__link" class:header__link--active=home_active>
                        "Home"
                    </a>
                    <a
                        href="/dashboard"
                        class="header__link"
                        class:header__link--active=dashboard_active
                    >
                        "Dashboard"
                    </a>
                </nav>
            </div>
            // Signing out only leaves the shell — there is no session to clear.
            <a href="/" class="header__signout">"Sign out"</a>
        </header>
    }
}
