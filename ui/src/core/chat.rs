//! Message-list model for the wellness AI-companion tab.
//!
//! There is no real AI behind this: the log starts with a canned greeting
//! and every user message is answered by the same pre-written reply after a
//! fixed delay. The view owns the delay (a task spawned on the component
//! scope, so it dies with the component); this module owns the list.

pub const COMPANION_GREETING: &str = "Hi there! 👋 I'm your AI wellness companion. \
    How are you feeling today? I'm here to listen and support you.";

pub const COMPANION_REPLY: &str = "I hear you, and it's completely valid to feel that way. \
    University life can be really challenging. Remember, it's okay to take things one step \
    at a time. Would you like to talk more about what's been on your mind, or would you \
    prefer some relaxation techniques? 💙";

/// Delay before the canned reply is appended, matching the original demo.
pub const REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Companion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// A fresh log already containing the companion greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                author: Author::Companion,
                text: COMPANION_GREETING.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user-authored entry. Whitespace-only input appends nothing;
    /// returns whether a message was actually added (the caller only
    /// schedules a reply when it was).
    pub fn push_user(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            author: Author::User,
            text: trimmed.to_string(),
        });
        true
    }

    /// Append the canned companion reply.
    pub fn push_companion_reply(&mut self) {
        self.messages.push(ChatMessage {
            author: Author::Companion,
            text: COMPANION_REPLY.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(log: &ChatLog, author: Author) -> usize {
        log.messages()
            .iter()
            .filter(|m| m.author == author)
            .count()
    }

    #[test]
    fn new_log_contains_only_the_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].author, Author::Companion);
        assert_eq!(log.messages()[0].text, COMPANION_GREETING);
    }

    #[test]
    fn non_empty_message_is_appended_immediately() {
        let mut log = ChatLog::new();
        assert!(log.push_user("I'm a bit stressed about finals."));
        assert_eq!(count(&log, Author::User), 1);
        assert_eq!(
            log.messages().last().map(|m| m.text.as_str()),
            Some("I'm a bit stressed about finals.")
        );
    }

    #[test]
    fn whitespace_only_input_appends_nothing() {
        let mut log = ChatLog::new();
        assert!(!log.push_user(""));
        assert!(!log.push_user("   "));
        assert!(!log.push_user("\n\t "));
        assert_eq!(log.messages().len(), 1);
    }

    #[test]
    fn input_is_trimmed_before_appending() {
        let mut log = ChatLog::new();
        assert!(log.push_user("  hello  "));
        assert_eq!(log.messages().last().map(|m| m.text.as_str()), Some("hello"));
    }

    #[test]
    fn each_sent_message_gets_exactly_one_companion_reply() {
        let mut log = ChatLog::new();
        assert!(log.push_user("hello"));
        log.push_companion_reply();
        // greeting + user + reply
        assert_eq!(log.messages().len(), 3);
        assert_eq!(count(&log, Author::Companion), 2);
        assert_eq!(
            log.messages().last().map(|m| m.text.as_str()),
            Some(COMPANION_REPLY)
        );
    }
}
