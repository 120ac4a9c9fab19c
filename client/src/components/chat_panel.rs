//! Embedded chat widget: transcript, send flow, and file upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sending a message pushes the user turn and a "Thinking..." placeholder
//! into shared chat state, POSTs the turn to the local chat proxy route, and
//! swaps the placeholder for the reply (or an error line). Input controls are
//! gated while the placeholder is pending.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Sender};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let busy = move || chat.get().is_thinking();

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || chat.get_untracked().is_thinking() {
            return;
        }

        let message = text.trim().to_owned();
        // History reflects the conversation before this turn.
        let history = chat.get_untracked().history();
        let mut thinking_id = 0;
        chat.update(|c| {
            c.push_user(message.clone());
            thinking_id = c.push_thinking();
        });
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(&message, &history).await {
                Ok(response) => chat.update(|c| c.resolve_thinking(thinking_id, response)),
                Err(e) => {
                    log::error!("chat request failed: {e}");
                    chat.update(|c| {
                        c.resolve_thinking(thinking_id, crate::net::api::chat_error_text(&e));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (message, history, thinking_id);
        }
    };

    let on_send_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_upload_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = file_input_ref.get() {
                el.click();
            }
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = file_input_ref.get() else {
                return;
            };
            let Some(file) = el.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Clear the input so the same file can be re-uploaded.
            el.set_value("");

            let name = file.name();
            chat.update(|c| {
                c.push_user(format!("Uploaded file: {name}"));
            });

            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("file", &file);

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_file(form).await {
                    Ok(()) => chat.update(|c| {
                        c.push_ai(format!("Received \"{name}\". I'll start processing it now."));
                    }),
                    Err(e) => {
                        log::error!("upload failed: {e}");
                        chat.update(|c| {
                            c.push_ai(format!("Error: Could not upload \"{name}\"."));
                        });
                    }
                }
            });
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !busy();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let id = msg.id;
                            let text = msg.text.clone();
                            let is_user = msg.sender == Sender::User;
                            let render_markdown = msg.sender == Sender::Ai && !msg.thinking;

                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                    class:chat-panel__message--thinking=msg.thinking
                                >
                                    {if render_markdown {
                                        let rendered = render_markdown_html(&text);
                                        view! {
                                            <div class="chat-panel__markdown" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{text}</span> }.into_any()
                                    }}
                                    <button
                                        class="chat-panel__delete"
                                        aria-label="Delete message"
                                        on:click=move |_| chat.update(|c| c.remove(id))
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    disabled=busy
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <input
                    class="chat-panel__file-input"
                    type="file"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
                <button
                    class="btn chat-panel__upload"
                    aria-label="Upload file"
                    disabled=busy
                    on:click=on_upload_click
                >
                    "📎"
                </button>
                <button
                    class="btn btn--primary chat-panel__send"
                    aria-label="Send message"
                    disabled=move || !can_send()
                    on:click=on_send_click
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
