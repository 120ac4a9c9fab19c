//! Three-panel dashboard workspace.
//!
//! ARCHITECTURE
//! ============
//! Composes the left chat list, the center chat conversation, and the right
//! data panel. Panel collapse/resize state lives in the shared `UiState`
//! signal; this component restores it from `localStorage` on mount and writes
//! every change back, so a reload reproduces the layout.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::left_panel::LeftPanel;
use crate::components::right_panel::RightPanel;
use crate::state::ui::{UiState, toggled_right_width};

#[component]
pub fn ThreePanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Restore persisted preferences once after hydration. No reactive reads,
    // so the effect runs a single time.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        ui.set(UiState::load());
    });

    // Persist every preference change.
    Effect::new(move || {
        let state = ui.get();
        #[cfg(feature = "hydrate")]
        state.persist();
        let _ = state;
    });

    let left_collapsed = move || ui.get().left_panel_collapsed;
    let right_collapsed = move || ui.get().right_panel_collapsed();

    let toggle_left = move |_| {
        ui.update(|u| u.left_panel_collapsed = !u.left_panel_collapsed);
    };
    let toggle_right = move |_| {
        ui.update(|u| u.right_panel_width = toggled_right_width(u.right_panel_width));
    };

    view! {
        <div class="three-panel">
            <LeftPanel/>

            <main class="three-panel__main">
                <div class="three-panel__main-header">
                    <button
                        class="three-panel__toggle"
                        on:click=toggle_left
                        aria-label=move || {
                            if left_collapsed() { "Expand left panel" } else { "Collapse left panel" }
                        }
                    >
                        {move || if left_collapsed() { "▶" } else { "◀" }}
                    </button>
                    <h1 class="three-panel__title">"Chat Conversation"</h1>
                    <button
                        class="three-panel__toggle three-panel__toggle--right"
                        on:click=toggle_right
                        aria-label=move || {
                            if right_collapsed() { "Expand right panel" } else { "Collapse right panel" }
                        }
                    >
                        {move || if right_collapsed() { "◀" } else { "▶" }}
                    </button>
                </div>
                <ChatPanel/>
            </main>

            <RightPanel/>
        </div>
    }
}
