use super::Selection;
use crate::node::{Forest, LogicNode, NodeId, NodeStatus, NodeType};
use crate::render::{MetadataPart, MetadataSummary, format_count};
use tracing::{debug, warn};

/// Affordances the detail panel exposes for the inspected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAction {
    Edit,
    Delete,
}

impl NodeAction {
    pub fn label(self) -> &'static str {
        match self {
            NodeAction::Edit => "Edit Node",
            NodeAction::Delete => "Delete Node",
        }
    }

    /// Hook point only: no editing or deletion behaviour is attached.
    pub fn invoke(self, node: &NodeId) {
        debug!(action = self.label(), node = %node, "node action has no handler");
    }
}

/// A read-only projection of the inspected node's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel<'a> {
    pub node: &'a LogicNode,
    pub metadata: MetadataSummary,
}

impl<'a> DetailPanel<'a> {
    /// Projects the current selection. Returns `None` when nothing is selected or the
    /// selected id is not part of `forest`.
    pub fn project(forest: &'a Forest, selection: &Selection) -> Option<Self> {
        let id = selection.current()?;
        let Some(node) = forest.get(id.as_str()) else {
            warn!(node = %id, "selected node is not in the forest");
            return None;
        };
        Some(Self {
            node,
            metadata: MetadataSummary::from_metadata(node.metadata.as_ref()),
        })
    }

    pub fn id(&self) -> &NodeId {
        &self.node.id
    }

    pub fn title(&self) -> &str {
        &self.node.title
    }

    pub fn description(&self) -> &str {
        &self.node.description
    }

    pub fn node_type(&self) -> NodeType {
        self.node.node_type
    }

    pub fn status(&self) -> NodeStatus {
        self.node.status
    }

    /// Labelled metadata fields, only those present on the node.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        self.metadata
            .parts
            .iter()
            .map(|part| match part {
                MetadataPart::Triggers(count) => ("Trigger Count", format_count(*count)),
                MetadataPart::Success { rate, .. } => ("Success Rate", format!("{}%", rate)),
                MetadataPart::Last(when) => ("Last Triggered", when.clone()),
            })
            .collect()
    }

    pub fn actions(&self) -> [NodeAction; 2] {
        [NodeAction::Edit, NodeAction::Delete]
    }
}
