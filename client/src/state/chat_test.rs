use super::*;

// =============================================================
// Seeded conversation
// =============================================================

#[test]
fn default_seeds_three_messages() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[0].sender, Sender::Ai);
    assert_eq!(state.messages[1].sender, Sender::User);
    assert_eq!(state.messages[2].sender, Sender::Ai);
    assert!(!state.is_thinking());
}

#[test]
fn seeded_ids_are_unique() {
    let state = ChatState::default();
    let mut ids: Vec<u64> = state.messages.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.messages.len());
}

// =============================================================
// Pushing messages
// =============================================================

#[test]
fn push_allocates_monotonic_ids() {
    let mut state = ChatState::default();
    let a = state.push_user("first");
    let b = state.push_ai("second");
    let c = state.push_user("third");
    assert!(a < b && b < c);
}

#[test]
fn ids_stay_unique_after_removal() {
    let mut state = ChatState::default();
    let a = state.push_user("going away");
    state.remove(a);
    let b = state.push_user("fresh");
    assert_ne!(a, b, "removed IDs must not be reused");
}

#[test]
fn push_thinking_sets_placeholder() {
    let mut state = ChatState::default();
    let id = state.push_thinking();
    assert!(state.is_thinking());
    let placeholder = state.messages.iter().find(|m| m.id == id).unwrap();
    assert_eq!(placeholder.text, THINKING_TEXT);
    assert_eq!(placeholder.sender, Sender::Ai);
}

// =============================================================
// Resolving the placeholder
// =============================================================

#[test]
fn resolve_thinking_replaces_placeholder() {
    let mut state = ChatState::default();
    state.push_user("question");
    let thinking = state.push_thinking();
    let before = state.messages.len();

    state.resolve_thinking(thinking, "answer");

    assert_eq!(state.messages.len(), before, "placeholder swapped, not appended");
    assert!(!state.is_thinking());
    assert!(state.messages.iter().all(|m| m.id != thinking));
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, "answer");
    assert_eq!(last.sender, Sender::Ai);
}

#[test]
fn resolve_thinking_with_error_text_clears_placeholder() {
    let mut state = ChatState::default();
    let thinking = state.push_thinking();
    state.resolve_thinking(thinking, "Error: Could not get response.");
    assert!(!state.is_thinking());
    assert_eq!(state.messages.last().unwrap().text, "Error: Could not get response.");
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_deletes_only_the_target() {
    let mut state = ChatState::default();
    let keep = state.push_user("keep me");
    let gone = state.push_user("delete me");
    state.remove(gone);
    assert!(state.messages.iter().any(|m| m.id == keep));
    assert!(state.messages.iter().all(|m| m.id != gone));
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = ChatState::default();
    let before = state.messages.clone();
    state.remove(9999);
    assert_eq!(state.messages, before);
}

// =============================================================
// History
// =============================================================

#[test]
fn history_maps_senders_to_roles() {
    let state = ChatState::default();
    let history = state.history();
    assert_eq!(history[0].role, "assistant");
    assert_eq!(history[1].role, "user");
    assert_eq!(history[1].content, "I need help reviewing a sales agreement.");
}

#[test]
fn history_excludes_thinking_placeholder() {
    let mut state = ChatState::default();
    state.push_user("question");
    state.push_thinking();
    let history = state.history();
    assert_eq!(history.len(), 4);
    assert!(history.iter().all(|turn| turn.content != THINKING_TEXT));
}

#[test]
fn history_turn_serializes_as_role_content() {
    let turn = HistoryTurn { role: "user".to_owned(), content: "hello".to_owned() };
    let json = serde_json::to_value(&turn).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hello" }));
}

// =============================================================
// Recent chat list
// =============================================================

#[test]
fn recent_chat_ids_are_unique() {
    let mut ids: Vec<u32> = RECENT_CHATS.iter().map(|entry| entry.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), RECENT_CHATS.len());
}

#[test]
fn recent_chat_titles_are_nonempty() {
    assert!(!RECENT_CHATS.is_empty());
    assert!(RECENT_CHATS.iter().all(|entry| !entry.title.is_empty()));
}
