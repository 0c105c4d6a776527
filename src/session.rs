use serde::Serialize;

use crate::{
    catalog::QUICK_QUESTIONS,
    error::{Error, Result},
    matcher::AnswerMatcher,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Transcript of one conversation with the assistant.
///
/// Each question is answered independently; the history is only kept for
/// display and is never consulted when matching.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask a free-text question and record both sides of the exchange.
    ///
    /// Empty input is ignored and returns `None`.
    pub fn ask(
        &mut self,
        matcher: &AnswerMatcher,
        input: &str,
    ) -> Option<&str> {
        if input.is_empty() {
            return None;
        }
        Some(self.record(matcher, input))
    }

    /// Ask the preset question at `index` (0-based).
    pub fn ask_quick(
        &mut self,
        matcher: &AnswerMatcher,
        index: usize,
    ) -> Result<&str> {
        let quick =
            QUICK_QUESTIONS.get(index).ok_or_else(|| Error::NotFound {
                kind: "quick question",
                name: index.saturating_add(1).to_string(),
            })?;
        Ok(self.record(matcher, quick.question))
    }

    fn record(&mut self, matcher: &AnswerMatcher, input: &str) -> &str {
        let reply = matcher.answer(input).text().to_owned();
        self.history.push(ChatMessage {
            role: Role::User,
            content: input.to_owned(),
        });
        self.history.push(ChatMessage {
            role: Role::Assistant,
            content: reply,
        });
        &self.history[self.history.len() - 1].content
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
