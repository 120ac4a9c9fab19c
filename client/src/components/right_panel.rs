//! Resizable right panel with collapsible data sections.
//!
//! ARCHITECTURE
//! ============
//! The drag handle captures the pointer on pointer-down, so move/up events
//! keep flowing to this panel for the duration of the drag; listeners cost
//! nothing once `dragging` is false again. Width changes go through the
//! shared `UiState` signal so they persist like every other preference.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::state::ui::{COLLAPSED_PANEL_WIDTH, UiState, clamp_right_width};

/// Container width used for the resize clamp.
fn container_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        1280.0
    }
}

#[component]
pub fn RightPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let dragging = RwSignal::new(false);
    let drag_start_x = RwSignal::new(0.0_f64);
    let drag_start_width = RwSignal::new(0.0_f64);

    let collapsed = move || ui.get().right_panel_collapsed();
    let width_style = move || {
        let width = ui.get().right_panel_width.max(COLLAPSED_PANEL_WIDTH);
        format!("width: {width:.0}px;")
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        dragging.set(true);
        drag_start_x.set(f64::from(ev.client_x()));
        drag_start_width.set(ui.get().right_panel_width);
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !dragging.get() {
            return;
        }
        let delta = drag_start_x.get() - f64::from(ev.client_x());
        let next = clamp_right_width(drag_start_width.get() + delta, container_width());
        ui.update(|u| u.right_panel_width = next);
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        dragging.set(false);
    };

    let table_visible = move || ui.get().table_visible;
    let contract_visible = move || ui.get().contract_visible;
    let toggle_table = move |_| ui.update(|u| u.table_visible = !u.table_visible);
    let toggle_contract = move |_| ui.update(|u| u.contract_visible = !u.contract_visible);

    view! {
        <aside
            class="right-panel"
            style=width_style
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div
                class="right-panel__resize-handle"
                on:pointerdown=on_pointer_down
                aria-label="Resize right panel"
            ></div>

            <Show when=move || !collapsed()>
                <div class="right-panel__body">
                    <button
                        class="right-panel__section-toggle"
                        on:click=toggle_table
                        attr:aria-expanded=move || table_visible().to_string()
                    >
                        "Extracted Data Table"
                        <span class="right-panel__chevron">
                            {move || if table_visible() { "▲" } else { "▼" }}
                        </span>
                    </button>
                    <Show when=table_visible>
                        <div class="right-panel__section">
                            <p class="right-panel__hint">"This panel displays extracted data in a table."</p>
                            <table class="right-panel__table">
                                <thead>
                                    <tr>
                                        <th>"Field"</th>
                                        <th>"Value"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <tr>
                                        <td>"Client Name"</td>
                                        <td>"Acme Corp"</td>
                                    </tr>
                                    <tr>
                                        <td>"Contract Value"</td>
                                        <td>"$125,000"</td>
                                    </tr>
                                    <tr>
                                        <td>"Effective Date"</td>
                                        <td>"2024-03-01"</td>
                                    </tr>
                                    <tr>
                                        <td>"Renewal Term"</td>
                                        <td>"12 months"</td>
                                    </tr>
                                </tbody>
                            </table>
                        </div>
                    </Show>

                    <button
                        class="right-panel__section-toggle"
                        on:click=toggle_contract
                        attr:aria-expanded=move || contract_visible().to_string()
                    >
                        "Contract Summary"
                        <span class="right-panel__chevron">
                            {move || if contract_visible() { "▲" } else { "▼" }}
                        </span>
                    </button>
                    <Show when=contract_visible>
                        <div class="right-panel__section">
                            <p>
                                "Sales agreement between Acme Corp and the supplier, covering \
                                 licensing, support, and renewal terms. Key obligations and \
                                 deadlines surfaced by the assistant appear here."
                            </p>
                        </div>
                    </Show>
                </div>
            </Show>
        </aside>
    }
}
