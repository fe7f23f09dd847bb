//! Chat transcript shown in the tutor panel.
//!
//! Messages are appended in the order calls resolve. A caller that lets
//! several questions overlap shares the transcript behind a lock and uses
//! `push_user` / `TutorGateway::ask` / `push_tutor` directly; replies then
//! land in resolution order, not submission order.

use time::OffsetDateTime;

use super::TutorGateway;

/// Opening message of every transcript.
pub const GREETING: &str = "Hello! I'm your GCP Security Tutor. I can explain concepts, debug policies, or simulate scenarios. How can I help?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Tutor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    fn now(role: Role, text: impl Into<String>) -> Self {
        Self { role, text: text.into(), timestamp: OffsetDateTime::now_utc() }
    }
}

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A transcript holding only the tutor greeting.
    #[must_use]
    pub fn new() -> Self {
        Self { messages: vec![ChatMessage::now(Role::Tutor, GREETING)] }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::now(Role::User, text))
    }

    pub fn push_tutor(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::now(Role::Tutor, text))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Append `question`, ask the tutor, append the reply.
    ///
    /// Blank questions are ignored and return `None`.
    pub async fn ask_and_record(
        &mut self,
        gateway: &TutorGateway,
        question: &str,
        context: &str,
    ) -> Option<&ChatMessage> {
        if question.trim().is_empty() {
            return None;
        }
        self.push_user(question);
        let reply = gateway.ask(question, context).await;
        Some(self.push_tutor(reply))
    }
}

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;
