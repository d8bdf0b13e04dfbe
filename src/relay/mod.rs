//! Question relay: topic gating, upstream failover and static answers
//!
//! Every component here is stateless. Keyword tables and the model list are
//! injected at construction and never mutated afterwards.

pub mod classifier;
pub mod fallback;
pub mod farm;
pub mod upstream;

pub use classifier::{KeywordClassifier, latest_user_message};
pub use fallback::{FallbackCategory, FallbackSynthesizer};
pub use farm::farm_guide;
pub use upstream::{AttemptOutcome, UpstreamAnswer, UpstreamClient};

use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserializes_lowercase() {
        let msg: Message = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn test_role_rejects_unknown() {
        let result: Result<Message, _> =
            serde_json::from_str(r#"{"role":"tool","content":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_role_serializes_to_wire_name() {
        for role in [Role::User, Role::Assistant, Role::System] {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, role.as_str());
        }
    }
}
