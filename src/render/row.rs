use crate::classify::{IconKind, RateTone, StatusDescriptor, classify_success_rate};
use crate::node::{LogicNode, NodeId, NodeMetadata};
use std::fmt;

/// One rendered line of the logic tree.
///
/// A row borrows the node it was rendered from; selecting the row selects exactly
/// that node (see [`NodeRow::node_id`]).
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow<'a> {
    pub node: &'a LogicNode,
    pub depth: usize,
    /// Leading columns, `depth * indent_unit`.
    pub indent: usize,
    pub type_icon: IconKind,
    pub status: &'static StatusDescriptor,
    pub summary: MetadataSummary,
    /// Whether the row shows the chevron affordance. Children are always rendered inline.
    pub expandable: bool,
}

impl NodeRow<'_> {
    /// The click target of this row.
    pub fn node_id(&self) -> &NodeId {
        &self.node.id
    }
}

/// A single figure in a node's metadata line.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataPart {
    Triggers(u64),
    Success { rate: f64, tone: RateTone },
    Last(String),
}

impl fmt::Display for MetadataPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataPart::Triggers(count) => write!(f, "Triggers: {}", format_count(*count)),
            MetadataPart::Success { rate, .. } => write!(f, "Success: {}%", rate),
            MetadataPart::Last(when) => write!(f, "Last: {}", when),
        }
    }
}

/// The present metadata figures of a node, in display order. Absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataSummary {
    pub parts: Vec<MetadataPart>,
}

impl MetadataSummary {
    pub fn from_metadata(metadata: Option<&NodeMetadata>) -> Self {
        let Some(metadata) = metadata else {
            return Self::default();
        };

        let mut parts = Vec::with_capacity(3);
        if let Some(count) = metadata.trigger_count {
            parts.push(MetadataPart::Triggers(count));
        }
        if let Some(rate) = metadata.success_rate {
            parts.push(MetadataPart::Success {
                rate,
                tone: classify_success_rate(rate),
            });
        }
        // An empty string is treated like an absent value.
        if let Some(when) = metadata.last_triggered.as_ref().filter(|s| !s.is_empty()) {
            parts.push(MetadataPart::Last(when.clone()));
        }
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Formats a count with `,` thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
