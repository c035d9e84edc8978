//! The generic output tree.
//!
//! A [`GenericNode`] is the language-independent record one syntax node
//! serializes to. Optional fields are omitted from the JSON entirely
//! rather than emitted as null or empty placeholders.

use serde::{Deserialize, Serialize};

/// One node of the generic output tree.
///
/// `kind` (serialized as `"type"`) is always present and carries the
/// grammar kind name of the syntax node it was built from. Which of the
/// optional fields are populated depends only on that kind, never on
/// child content.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericNode {
    /// Declared identifier, for declaration kinds that bind one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Grammar kind name of the source node.
    #[serde(rename = "type")]
    pub kind: String,

    /// Child nodes, in the kind's own semantic order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GenericNode>,

    /// Literal or identifier source text, for leaf kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Comment text collected at this position, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl GenericNode {
    /// Create an empty node of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Total number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(GenericNode::node_count).sum::<usize>()
    }

    /// Find the first direct child of the given kind.
    pub fn child_of_kind(&self, kind: &str) -> Option<&GenericNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Kinds of the direct children, in order.
    pub fn child_kinds(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.kind.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optionals_are_omitted() {
        let node = GenericNode::new("empty_statement");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"type":"empty_statement"}"#);
    }

    #[test]
    fn test_populated_fields_serialize_in_schema_order() {
        let node = GenericNode {
            name: Some("main".to_string()),
            kind: "function_declaration".to_string(),
            children: vec![GenericNode::new("parameter_list")],
            value: None,
            comments: vec![],
        };
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"name":"main","type":"function_declaration","children":[{"type":"parameter_list"}]}"#
        );
    }

    #[test]
    fn test_node_count() {
        let mut root = GenericNode::new("source_file");
        root.children.push(GenericNode::new("function_declaration"));
        root.children[0].children.push(GenericNode::new("block"));
        assert_eq!(root.node_count(), 3);
    }
}
