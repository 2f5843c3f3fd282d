//! Parsed form of a specialization document.

use serde_yaml::Value;

use super::error::PromptError;

/// A node of the specialization tree.
///
/// Mappings become [`SpecializationNode::Branch`] with their entries kept in
/// document order, which the resolver relies on for its last-match-wins rule.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecializationNode {
    /// A string value: a text template.
    Text(String),
    /// A mapping: nested specializations and/or a `messages` sequence.
    Branch(Branch),
    /// Any other value (sequence, number, boolean, null).
    Opaque(Value),
}

/// An ordered mapping from string keys to nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    entries: Vec<(String, SpecializationNode)>,
}

impl Branch {
    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SpecializationNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn get(&self, key: &str) -> Option<&SpecializationNode> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpecializationNode {
    /// Parse raw document text into a fresh tree.
    pub fn parse(text: &str) -> Result<Self, PromptError> {
        let value: Value = serde_yaml::from_str(text)?;
        Ok(Self::from(value))
    }

    /// A YAML `null` never counts as a selected section.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Opaque(Value::Null))
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    /// Short human-readable description of the node's shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "a string",
            Self::Branch(_) => "a mapping",
            Self::Opaque(Value::Null) => "null",
            Self::Opaque(Value::Bool(_)) => "a boolean",
            Self::Opaque(Value::Number(_)) => "a number",
            Self::Opaque(Value::Sequence(_)) => "a sequence",
            Self::Opaque(_) => "an unsupported value",
        }
    }
}

impl From<Value> for SpecializationNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Mapping(mapping) => {
                let entries = mapping
                    .into_iter()
                    .filter_map(|(key, value)| Some((key_to_string(key)?, Self::from(value))))
                    .collect();
                Self::Branch(Branch { entries })
            }
            Value::Tagged(tagged) => Self::from(tagged.value),
            other => Self::Opaque(other),
        }
    }
}

/// Scalar keys are matched by their textual form; composite keys are dropped.
fn key_to_string(key: Value) -> Option<String> {
    match key {
        Value::String(key) => Some(key),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        _ => None,
    }
}
