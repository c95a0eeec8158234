// src/session.rs

use crate::chat_message::ChatMessage;
use crate::chatbot;
use crate::config::get_config;
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Owns the conversation display list and schedules the deferred bot
/// replies. All mutation happens on the UI task; reply tasks only send the
/// computed text back over the channel.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    reply_tx: UnboundedSender<String>,
    pending_replies: usize,
}

impl ChatSession {
    pub fn new(reply_tx: UnboundedSender<String>) -> Self {
        Self {
            messages: Vec::new(),
            reply_tx,
            pending_replies: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of replies scheduled but not yet delivered.
    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Submits raw input from the user.
    ///
    /// Trims the input; empty or whitespace-only input is a no-op and
    /// returns false. Otherwise the trimmed text is appended as a user
    /// message and one reply task is scheduled with a randomized delay.
    /// Returns true so the caller can clear the input field.
    ///
    /// Rapid submits schedule independent timers; since delays are drawn
    /// per call, replies are not guaranteed to arrive in send order.
    pub fn submit(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(text));
        self.pending_replies += 1;

        let delay = reply_delay();
        log::debug!("reply scheduled in {}ms for \"{}\"", delay.as_millis(), text);

        let tx = self.reply_tx.clone();
        let text = text.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone when the UI shut down; late replies are
            // simply discarded.
            let _ = tx.send(chatbot::classify(&text).to_string());
        });

        true
    }

    /// Appends a delivered bot reply to the display list.
    pub fn push_reply(&mut self, text: String) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        log::debug!("reply delivered ({} still pending)", self.pending_replies);
        self.messages.push(ChatMessage::bot(text));
    }
}

/// Uniform random reply delay in `[min, max)` milliseconds.
fn reply_delay() -> Duration {
    let config = get_config();
    let ms = rand::rng().random_range(config.reply_delay_min_ms..config.reply_delay_max_ms);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Origin;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn whitespace_input_is_a_no_op() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new(tx);

        assert!(!session.submit(""));
        assert!(!session.submit("   "));
        assert!(!session.submit("\t\n"));

        assert!(session.messages().is_empty());
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test]
    async fn submit_appends_the_trimmed_user_message() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new(tx);

        assert!(session.submit("  Gracias!  "));

        assert_eq!(session.messages().len(), 1);
        let msg = &session.messages()[0];
        assert_eq!(msg.origin(), Origin::User);
        assert_eq!(msg.content(), "Gracias!");
        assert_eq!(session.pending_replies(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_within_the_delay_window() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new(tx);

        let start = tokio::time::Instant::now();
        assert!(session.submit("Gracias!"));

        let reply = rx.recv().await.expect("reply should arrive");
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(500), "elapsed: {elapsed:?}");
        assert!(elapsed < Duration::from_millis(1000), "elapsed: {elapsed:?}");
        assert_eq!(reply, chatbot::classify("Gracias!"));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_is_computed_from_the_text_captured_at_submit_time() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new(tx);

        session.submit("hola");

        let reply = rx.recv().await.expect("reply should arrive");
        assert_eq!(reply, chatbot::classify("hola"));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_submits_each_get_a_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new(tx);

        session.submit("hola");
        session.submit("¿cuánto cuesta?");
        assert_eq!(session.pending_replies(), 2);

        let mut replies = Vec::new();
        replies.push(rx.recv().await.expect("first reply"));
        replies.push(rx.recv().await.expect("second reply"));

        // Delays are independent, so arrival order is not guaranteed.
        assert!(replies.contains(&chatbot::classify("hola").to_string()));
        assert!(replies.contains(&chatbot::classify("¿cuánto cuesta?").to_string()));
    }

    #[tokio::test]
    async fn push_reply_appends_a_bot_message_and_settles_pending() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut session = ChatSession::new(tx);

        session.submit("hola");
        session.push_reply("¡Hola! 👋 ¿En qué puedo ayudarte hoy?".to_string());

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].origin(), Origin::Bot);
        assert_eq!(session.pending_replies(), 0);
    }
}
