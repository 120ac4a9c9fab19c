//! Chat conversation state for the dashboard widget.
//!
//! DESIGN
//! ======
//! Messages live only in memory for the lifetime of the page — there is no
//! chat persistence. IDs come from a monotonic counter, so they are unique
//! within a session. While a request is in flight a single "Thinking..."
//! placeholder message gates the input controls; it is replaced (never
//! duplicated) when the reply or an error arrives, and it is excluded from
//! the history sent to the backend.

use serde::Serialize;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Placeholder text shown while a chat request is in flight.
pub const THINKING_TEXT: &str = "Thinking...";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

/// One message in the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// True only for the in-flight placeholder.
    pub thinking: bool,
}

/// One prior turn in the shape the backend expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryTurn {
    pub role: String,
    pub content: String,
}

/// The full conversation plus the ID counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatState {
    /// Seed the demo conversation shown when the dashboard opens.
    fn default() -> Self {
        let messages = vec![
            ChatMessage {
                id: 1,
                text: "Hello! How can I assist you with your contract today?".to_owned(),
                sender: Sender::Ai,
                thinking: false,
            },
            ChatMessage {
                id: 2,
                text: "I need help reviewing a sales agreement.".to_owned(),
                sender: Sender::User,
                thinking: false,
            },
            ChatMessage {
                id: 3,
                text: "Please upload the document or paste the text here.".to_owned(),
                sender: Sender::Ai,
                thinking: false,
            },
        ];
        Self { messages, next_id: 4 }
    }
}

impl ChatState {
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a user message, returning its ID.
    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        let id = self.alloc_id();
        self.messages.push(ChatMessage { id, text: text.into(), sender: Sender::User, thinking: false });
        id
    }

    /// Append an assistant message, returning its ID.
    pub fn push_ai(&mut self, text: impl Into<String>) -> u64 {
        let id = self.alloc_id();
        self.messages.push(ChatMessage { id, text: text.into(), sender: Sender::Ai, thinking: false });
        id
    }

    /// Append the in-flight placeholder, returning its ID.
    pub fn push_thinking(&mut self) -> u64 {
        let id = self.alloc_id();
        self.messages.push(ChatMessage { id, text: THINKING_TEXT.to_owned(), sender: Sender::Ai, thinking: true });
        id
    }

    /// Replace the placeholder with a finished assistant message.
    pub fn resolve_thinking(&mut self, thinking_id: u64, text: impl Into<String>) {
        self.messages.retain(|m| m.id != thinking_id);
        self.push_ai(text);
    }

    /// Remove a message by ID. Unknown IDs are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.messages.retain(|m| m.id != id);
    }

    /// True while a request placeholder is pending.
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.messages.iter().any(|m| m.thinking)
    }

    /// Conversation history for the backend: role/content pairs with the
    /// placeholder excluded.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryTurn> {
        self.messages
            .iter()
            .filter(|m| !m.thinking)
            .map(|m| HistoryTurn {
                role: match m.sender {
                    Sender::User => "user",
                    Sender::Ai => "assistant",
                }
                .to_owned(),
                content: m.text.clone(),
            })
            .collect()
    }
}

// =============================================================================
// RECENT CHAT LIST
// =============================================================================

/// A bundled left-panel chat list entry. Display-only, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatListEntry {
    pub id: u32,
    pub title: &'static str,
}

/// The static "Recent Chats" list shown in the left panel.
pub const RECENT_CHATS: &[ChatListEntry] = &[
    ChatListEntry { id: 1, title: "Sales agreement review" },
    ChatListEntry { id: 2, title: "GDPR data retention query" },
    ChatListEntry { id: 3, title: "Vendor MSA redlines" },
    ChatListEntry { id: 4, title: "SOX control mapping" },
    ChatListEntry { id: 5, title: "Privacy policy refresh" },
    ChatListEntry { id: 6, title: "NDA quick check" },
    ChatListEntry { id: 7, title: "PCI scope assessment" },
    ChatListEntry { id: 8, title: "Employment contract terms" },
];
