//! Chat messages and the session transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ChatMessageId;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single message in the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position in the transcript, starting at 1.
    pub id: ChatMessageId,
    /// Text exactly as submitted.
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
}

/// Ordered, append-only list of messages for one session.
///
/// IDs are assigned in creation order, so they are strictly increasing even
/// when two messages share a timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// An empty transcript.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// A transcript that opens with `greeting` from the assistant.
    #[must_use]
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Self::new();
        transcript.push(Sender::Assistant, greeting);
        transcript
    }

    /// Append a message and return it.
    #[allow(clippy::indexing_slicing)] // non-empty after push
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatMessage {
        let id = self
            .messages
            .last()
            .map_or(ChatMessageId::new(1), |last| last.id.next());
        self.messages.push(ChatMessage {
            id,
            text: text.into(),
            sender,
            created_at: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over messages, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
