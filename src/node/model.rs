use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque, forest-wide unique identity of a logic node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The role a node plays in a logic tree. Only affects iconography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Trigger,
    Condition,
    Action,
    Branch,
}

impl NodeType {
    pub const ALL: [NodeType; 4] = [
        NodeType::Trigger,
        NodeType::Condition,
        NodeType::Action,
        NodeType::Branch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Trigger => "trigger",
            NodeType::Condition => "condition",
            NodeType::Action => "action",
            NodeType::Branch => "branch",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status of a node, independent of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Active,
    Inactive,
    Error,
}

impl NodeStatus {
    pub const ALL: [NodeStatus; 3] = [NodeStatus::Active, NodeStatus::Inactive, NodeStatus::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Active => "active",
            NodeStatus::Inactive => "inactive",
            NodeStatus::Error => "error",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional runtime figures attached to a node. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_count: Option<u64>,
    /// Percentage in the 0-100 range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    /// Free-text relative time, e.g. "2 minutes ago".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_triggered: Option<String>,
}

impl NodeMetadata {
    pub fn is_empty(&self) -> bool {
        self.trigger_count.is_none() && self.success_rate.is_none() && self.last_triggered.is_none()
    }
}

/// A single node of a logic tree. Children are owned, so the structure is always a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: NodeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NodeMetadata>,
    /// Display order. A missing key and an empty array both mean "leaf".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LogicNode>,
}

impl LogicNode {
    pub fn new(
        id: impl Into<NodeId>,
        node_type: NodeType,
        status: NodeStatus,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            title: title.into(),
            description: String::new(),
            status,
            metadata: None,
            children: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_metadata(mut self, metadata: NodeMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_children(mut self, children: Vec<LogicNode>) -> Self {
        self.children = children;
        self
    }

    pub fn child(mut self, child: LogicNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn trigger_count(&self) -> Option<u64> {
        self.metadata.as_ref().and_then(|m| m.trigger_count)
    }
}

// Tear down iteratively so arbitrarily deep trees do not exhaust the stack.
impl Drop for LogicNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
