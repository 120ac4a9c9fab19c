//! Dashboard page: header plus the three-panel workspace.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::three_panel::ThreePanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <Header/>
            <ThreePanel/>
        </div>
    }
}
