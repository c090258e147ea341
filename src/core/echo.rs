//! Echo reply generation and conversation titles.

/// Number of characters of the opening message kept in a conversation title.
pub const TITLE_PREFIX_LEN: usize = 15;

/// Produces the automated reply for a user message.
///
/// Pure and total: the same input always yields the same output.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoEngine;

impl EchoEngine {
    pub fn transform(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Title for a conversation opened by `message`.
///
/// Messages longer than [`TITLE_PREFIX_LEN`] characters are cut and suffixed with `...`.
pub fn conversation_title(message: &str) -> String {
    match message.char_indices().nth(TITLE_PREFIX_LEN) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_owned(),
    }
}
