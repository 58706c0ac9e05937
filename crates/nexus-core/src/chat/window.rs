//! Prompt window construction.
//!
//! The window is a suffix of `[system] + history + [new user turn]` holding at
//! most `max_window` turns. With pinning enabled the system turn is kept
//! outside the truncation count, so it is always first; without pinning the
//! whole sequence is truncated uniformly and the system turn drops out once
//! the conversation alone fills the window.

use std::iter;

use nexus_types::chat::Turn;

/// Build the prompt window for one request.
pub fn build_window(
    system: &Turn,
    history: &[Turn],
    new_user: &Turn,
    max_window: usize,
    pin_system: bool,
) -> Vec<Turn> {
    let conversation = history.iter().chain(iter::once(new_user));
    let conversation_len = history.len() + 1;

    if pin_system {
        if max_window == 0 {
            return Vec::new();
        }
        let keep = max_window - 1;
        let skip = conversation_len.saturating_sub(keep);
        iter::once(system)
            .chain(conversation.skip(skip))
            .cloned()
            .collect()
    } else {
        let skip = (conversation_len + 1).saturating_sub(max_window);
        iter::once(system)
            .chain(conversation)
            .skip(skip)
            .cloned()
            .collect()
    }
}
