//! Support chat widget.
//!
//! The widget owns the session transcript. A submission appends the user's
//! message right away and produces a [`PendingReply`]; the reply is only
//! appended when it is delivered, after the configured "typing" delay.
//!
//! Every pending reply carries the widget epoch it was created in. Resetting
//! the conversation bumps the epoch, so a reply that was still in flight is
//! dropped instead of showing up in the fresh transcript.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use levelup_core::assistant::{self, Topic, WELCOME_MESSAGE};
use levelup_core::{ChatMessage, ChatMessageId, Sender, Transcript};

/// Capacity of the delivered-reply broadcast channel.
const REPLY_CHANNEL_CAPACITY: usize = 32;

/// Identifies the submission a reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    epoch: u64,
    /// The user message that triggered the reply.
    pub trigger: ChatMessageId,
}

/// An assistant reply that has been chosen but not yet shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub text: &'static str,
    /// `None` when the fallback reply was chosen.
    pub topic: Option<Topic>,
}

/// Synchronous chat state: transcript, open flag and outstanding replies.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    transcript: Transcript,
    epoch: u64,
    awaiting: usize,
    open: bool,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// A closed widget whose transcript opens with the assistant's welcome.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_greeting(WELCOME_MESSAGE),
            epoch: 0,
            awaiting: 0,
            open: false,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Hide the widget. The transcript and any pending replies survive.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Whether the typing indicator should be shown.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.awaiting > 0
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Record the user's message and choose the reply to it.
    ///
    /// Blank input is ignored and returns `None`. The text is stored exactly
    /// as typed; only the rule matching sees it lower-cased.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }

        let trigger = self.transcript.push(Sender::User, input).id;
        self.awaiting += 1;

        Some(PendingReply {
            ticket: ReplyTicket {
                epoch: self.epoch,
                trigger,
            },
            text: assistant::select_response(input),
            topic: assistant::classify(input),
        })
    }

    /// Append a pending reply to the transcript.
    ///
    /// Returns the appended message, or `None` if the reply was issued before
    /// the last [`reset`](Self::reset) and has been dropped.
    pub fn deliver(&mut self, reply: PendingReply) -> Option<ChatMessage> {
        if reply.ticket.epoch != self.epoch {
            debug!(trigger = %reply.ticket.trigger, "Dropping stale reply");
            return None;
        }
        self.awaiting = self.awaiting.saturating_sub(1);
        Some(self.transcript.push(Sender::Assistant, reply.text).clone())
    }

    /// Start a new conversation, invalidating every pending reply.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.awaiting = 0;
        self.transcript = Transcript::with_greeting(WELCOME_MESSAGE);
    }
}

struct ChatInner {
    widget: ChatWidget,
    in_flight: Vec<JoinHandle<()>>,
}

/// Async front of [`ChatWidget`] that delivers replies after a delay.
///
/// Cheaply cloneable; clones share the same widget.
#[derive(Clone)]
pub struct ChatService {
    inner: Arc<Mutex<ChatInner>>,
    delay: Duration,
    replies: broadcast::Sender<ChatMessage>,
}

impl ChatService {
    /// Create a chat service with the given typing delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (replies, _) = broadcast::channel(REPLY_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(ChatInner {
                widget: ChatWidget::new(),
                in_flight: Vec::new(),
            })),
            delay,
            replies,
        }
    }

    /// Receive every assistant reply as it is delivered.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChatMessage> {
        self.replies.subscribe()
    }

    /// Submit user input, opening the widget if needed.
    ///
    /// Returns the stored user message, or `None` for blank input. The reply
    /// is delivered in the background once the delay elapses.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub async fn send(&self, input: &str) -> Option<ChatMessage> {
        let mut inner = self.inner.lock().await;
        inner.widget.open();
        let pending = inner.widget.submit(input)?;
        let user_message = inner.widget.transcript().last().cloned();

        info!(trigger = %pending.ticket.trigger, topic = ?pending.topic, "Reply scheduled");

        inner.in_flight.retain(|handle| !handle.is_finished());
        let handle = tokio::spawn(deliver_later(
            Arc::clone(&self.inner),
            self.replies.clone(),
            self.delay,
            pending,
        ));
        inner.in_flight.push(handle);

        user_message
    }

    /// Cancel pending replies and start a new conversation.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        let cancelled = inner.in_flight.len();
        for handle in inner.in_flight.drain(..) {
            handle.abort();
        }
        inner.widget.reset();
        debug!(cancelled, "Chat reset");
    }

    pub async fn open(&self) {
        self.inner.lock().await.widget.open();
    }

    pub async fn close(&self) {
        self.inner.lock().await.widget.close();
    }

    pub async fn is_open(&self) -> bool {
        self.inner.lock().await.widget.is_open()
    }

    pub async fn is_typing(&self) -> bool {
        self.inner.lock().await.widget.is_typing()
    }

    /// A copy of the current transcript.
    pub async fn transcript(&self) -> Transcript {
        self.inner.lock().await.widget.transcript().clone()
    }
}

async fn deliver_later(
    inner: Arc<Mutex<ChatInner>>,
    replies: broadcast::Sender<ChatMessage>,
    delay: Duration,
    pending: PendingReply,
) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let delivered = inner.lock().await.widget.deliver(pending);
    if let Some(message) = delivered {
        // No subscribers is fine: the reply is already in the transcript.
        let _ = replies.send(message);
    }
}
