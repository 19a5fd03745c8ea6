//! Chat transcript with at most one in-flight reply

use crate::error::ChatError;
use crate::responder::{Reply, Responder};
use chrono::{DateTime, Utc};
use pehchaan_core::classifier::WELCOME_MESSAGE;
use pehchaan_core::{Author, Category, ChatMessage, IdClock};
use pehchaan_notify::{Notifier, Toast};

pub const FALLBACK_REPLY: &str = "I'm sorry, I encountered an error. Please try again.";

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    ids: IdClock,
}

impl ChatSession {
    /// A session opened with the assistant's greeting
    pub fn new() -> Self {
        let mut session = Self::empty();
        let now = Utc::now();
        let id = session.next_id(now);
        session.messages.push(ChatMessage::bot(
            id,
            WELCOME_MESSAGE,
            now,
            Some(Category::Info),
        ));
        session
    }

    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
            ids: IdClock::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// True while a reply is outstanding; new sends are refused
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append the user's message and mark a reply as pending
    pub fn begin(&mut self, text: &str) -> Result<&ChatMessage, ChatError> {
        if self.pending {
            return Err(ChatError::Pending);
        }
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let now = Utc::now();
        let id = self.next_id(now);
        self.messages.push(ChatMessage::user(id, text, now));
        self.pending = true;
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Append the bot's reply for the pending message.
    ///
    /// Responder failures become a destructive toast plus the fallback reply.
    pub fn complete(
        &mut self,
        result: Result<Reply, ChatError>,
        notifier: &mut dyn Notifier,
    ) -> Result<&ChatMessage, ChatError> {
        if !self.pending {
            return Err(ChatError::NotPending);
        }

        let reply = match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "assistant reply failed");
                notifier.notify(&failure_toast(&err));
                Reply {
                    text: FALLBACK_REPLY.to_string(),
                    category: None,
                }
            }
        };

        if reply.category == Some(Category::Complaint) {
            notifier.notify(&Toast::new(
                "Complaint Logged",
                "Your complaint has been registered and assigned to our team.",
            ));
        }

        let now = Utc::now();
        let id = self.next_id(now);
        self.messages
            .push(ChatMessage::bot(id, reply.text, now, reply.category));
        self.pending = false;
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Withdraw the unanswered user message and clear the pending flag.
    ///
    /// Returns false when no reply was outstanding.
    pub fn cancel(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        if self.messages.last().map(ChatMessage::author) == Some(Author::User) {
            self.messages.pop();
        }
        self.pending = false;
        tracing::debug!("pending reply cancelled");
        true
    }

    /// Send one message and wait for the reply.
    ///
    /// Dropping the returned future before it resolves cancels the send.
    pub async fn send(
        &mut self,
        text: &str,
        responder: &dyn Responder,
        notifier: &mut dyn Notifier,
    ) -> Result<&ChatMessage, ChatError> {
        self.begin(text)?;
        tracing::info!(responder = responder.name(), "message sent");

        let mut guard = PendingGuard {
            session: Some(self),
        };
        let history = guard.session.as_deref().map_or(&[][..], |s| &s.messages[..]);
        let result = responder.reply(history).await;

        match guard.session.take() {
            Some(session) => session.complete(result, notifier),
            None => Err(ChatError::NotPending),
        }
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        self.ids.next(now).to_string()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolls the session back if a send is dropped mid-reply
struct PendingGuard<'a> {
    session: Option<&'a mut ChatSession>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel();
        }
    }
}

fn failure_toast(err: &ChatError) -> Toast {
    if err.is_rate_limited() {
        Toast::destructive(
            "Rate Limit Exceeded",
            "Too many requests. Please wait a moment and try again.",
        )
    } else {
        Toast::destructive("Error", "Failed to get a response. Please try again.")
    }
}
