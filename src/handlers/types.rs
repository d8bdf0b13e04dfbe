//! Request and response bodies

use crate::relay::Message;
use serde::{Deserialize, Serialize};

/// Body of the `/ask-law*` routes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Body of `/ask-farm`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmRequest {
    pub plant: String,
    pub location: String,
    /// Accepted for compatibility; the guide does not use it
    #[serde(default)]
    pub question: Option<String>,
}

/// Body of `/ask`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// The single response shape of every answering route
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    answer: String,
}

impl Answer {
    pub fn new(answer: impl Into<String>) -> Self {
        let answer = answer.into();
        debug_assert!(!answer.trim().is_empty(), "answers must never be empty");
        Self { answer }
    }

    pub fn text(&self) -> &str {
        &self.answer
    }
}
