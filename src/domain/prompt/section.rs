//! Renderable sections and the message types they produce.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::PromptError;
use super::tree::SpecializationNode;

/// Key under which a mapping exposes its message sequence.
pub const MESSAGES_KEY: &str = "messages";

/// Role of a chat message.
///
/// Unrecognized role strings are kept verbatim in [`MessageRole::Other`] so
/// they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
    Other(String),
}

impl MessageRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Tool => "tool",
            Self::Other(role) => role,
        }
    }
}

impl From<String> for MessageRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "system" => Self::System,
            "user" => Self::User,
            "assistant" => Self::Assistant,
            "tool" => Self::Tool,
            _ => Self::Other(role),
        }
    }
}

impl From<&str> for MessageRole {
    fn from(role: &str) -> Self {
        Self::from(role.to_string())
    }
}

impl From<MessageRole> for String {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a message-mode section, before substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub role: MessageRole,
    pub content: String,
}

/// A rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// A resolved, terminal unit ready for variable substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderableSection {
    /// A single string template; renders to plain text.
    Text(String),
    /// An ordered list of message templates; renders to chat messages.
    Messages(Vec<MessageTemplate>),
}

impl RenderableSection {
    pub fn is_messages(&self) -> bool {
        matches!(self, Self::Messages(_))
    }
}

impl TryFrom<&SpecializationNode> for RenderableSection {
    type Error = PromptError;

    fn try_from(node: &SpecializationNode) -> Result<Self, Self::Error> {
        match node {
            SpecializationNode::Text(template) => Ok(Self::Text(template.clone())),
            SpecializationNode::Branch(branch) => match branch.get(MESSAGES_KEY) {
                Some(SpecializationNode::Opaque(value)) if !value.is_null() => {
                    let messages: Vec<MessageTemplate> = serde_yaml::from_value(value.clone())
                        .map_err(|err| PromptError::InvalidMessages { reason: err.to_string() })?;
                    Ok(Self::Messages(messages))
                }
                Some(other) => Err(PromptError::InvalidMessages {
                    reason: format!("expected a sequence, found {}", other.kind()),
                }),
                None => Err(PromptError::InvalidTemplateSection {
                    found: "a mapping without `messages`".to_string(),
                }),
            },
            SpecializationNode::Opaque(_) => {
                Err(PromptError::InvalidTemplateSection { found: node.kind().to_string() })
            }
        }
    }
}

/// The result of formatting a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptOutput {
    Text(String),
    Messages(Vec<ChatMessage>),
}

impl PromptOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Messages(_) => None,
        }
    }

    pub fn as_messages(&self) -> Option<&[ChatMessage]> {
        match self {
            Self::Text(_) => None,
            Self::Messages(messages) => Some(messages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(yaml: &str) -> SpecializationNode {
        SpecializationNode::parse(yaml).unwrap()
    }

    #[test]
    fn string_node_is_text_section() {
        let section = RenderableSection::try_from(&node("Hi {{name}}")).unwrap();
        assert_eq!(section, RenderableSection::Text("Hi {{name}}".to_string()));
    }

    #[test]
    fn mapping_with_messages_is_message_section() {
        let section = RenderableSection::try_from(&node(
            "messages:\n  - role: system\n    content: Hello {{name}}\n  - role: user\n    content: Hi\n",
        ))
        .unwrap();

        let RenderableSection::Messages(messages) = section else {
            panic!("expected messages");
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].content, "Hello {{name}}");
        assert_eq!(messages[1].role, MessageRole::User);
    }

    #[test]
    fn empty_message_list_is_valid() {
        let section = RenderableSection::try_from(&node("messages: []")).unwrap();
        assert_eq!(section, RenderableSection::Messages(Vec::new()));
    }

    #[test]
    fn mapping_without_messages_is_rejected() {
        let err = RenderableSection::try_from(&node("other: value")).unwrap_err();
        assert!(matches!(err, PromptError::InvalidTemplateSection { .. }));
    }

    #[test]
    fn scalar_and_sequence_are_rejected() {
        for yaml in ["42", "true", "- a\n- b", "~"] {
            let err = RenderableSection::try_from(&node(yaml)).unwrap_err();
            assert!(
                matches!(err, PromptError::InvalidTemplateSection { .. }),
                "{yaml} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn message_without_content_is_rejected() {
        let err = RenderableSection::try_from(&node("messages:\n  - role: user\n")).unwrap_err();
        assert!(matches!(err, PromptError::InvalidMessages { .. }));
    }

    #[test]
    fn messages_as_string_is_rejected() {
        let err = RenderableSection::try_from(&node("messages: hello")).unwrap_err();
        assert!(matches!(err, PromptError::InvalidMessages { .. }));
    }

    #[test]
    fn unknown_roles_round_trip_verbatim() {
        let role = MessageRole::from("narrator");
        assert_eq!(role, MessageRole::Other("narrator".to_string()));
        assert_eq!(String::from(role), "narrator");

        let json = serde_json::to_string(&ChatMessage {
            role: MessageRole::Other("Critic".into()),
            content: "x".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"role":"Critic","content":"x"}"#);
    }

    #[test]
    fn known_roles_parse_from_strings() {
        assert_eq!(MessageRole::from("system"), MessageRole::System);
        assert_eq!(MessageRole::from("assistant"), MessageRole::Assistant);
        assert_eq!(MessageRole::from("tool"), MessageRole::Tool);
        assert_eq!(MessageRole::User.to_string(), "user");
    }
}
