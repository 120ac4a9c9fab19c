//! Collapsible left panel: chat search and the bundled recent-chat list.

use leptos::prelude::*;

use crate::state::chat::RECENT_CHATS;
use crate::state::ui::{COLLAPSED_PANEL_WIDTH, DEFAULT_LEFT_PANEL_WIDTH, UiState};

#[component]
pub fn LeftPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || ui.get().left_panel_collapsed;
    let width_style = move || {
        let width = if collapsed() { COLLAPSED_PANEL_WIDTH } else { DEFAULT_LEFT_PANEL_WIDTH };
        format!("width: {width:.0}px;")
    };

    view! {
        <aside class="left-panel" class:left-panel--collapsed=collapsed style=width_style>
            <Show when=move || !collapsed()>
                <div class="left-panel__body">
                    <input class="left-panel__search" type="text" placeholder="Search chats..."/>
                    <h2 class="left-panel__heading">"Recent Chats"</h2>
                    <div class="left-panel__chats">
                        {RECENT_CHATS
                            .iter()
                            .map(|entry| {
                                view! { <p class="left-panel__chat">{entry.title}</p> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>
        </aside>
    }
}
