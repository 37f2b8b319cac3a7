//! Ephemeral "currently inspected node" state and its detail projection.

pub mod panel;

pub use panel::{DetailPanel, NodeAction};

use crate::node::NodeId;
use tracing::debug;

/// Which node, if any, is being inspected.
///
/// Only the id is stored; the node itself is resolved against the forest when the
/// detail panel is projected, so a selection never holds stale node data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Inspecting(NodeId),
}

impl Selection {
    /// Selects `id`, replacing any current selection.
    pub fn select(&mut self, id: NodeId) {
        debug!(from = ?self.current(), to = %id, "selection changed");
        *self = Selection::Inspecting(id);
    }

    /// Returns to `Unselected`.
    pub fn dismiss(&mut self) {
        if let Selection::Inspecting(id) = self {
            debug!(node = %id, "selection dismissed");
        }
        *self = Selection::Unselected;
    }

    pub fn current(&self) -> Option<&NodeId> {
        match self {
            Selection::Unselected => None,
            Selection::Inspecting(id) => Some(id),
        }
    }

    pub fn is_inspecting(&self) -> bool {
        matches!(self, Selection::Inspecting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected() {
        assert_eq!(Selection::default(), Selection::Unselected);
        assert!(Selection::default().current().is_none());
    }

    #[test]
    fn fresh_selection_overwrites() {
        let mut selection = Selection::default();
        selection.select(NodeId::new("a"));
        selection.select(NodeId::new("b"));
        assert_eq!(selection, Selection::Inspecting(NodeId::new("b")));
        selection.dismiss();
        assert_eq!(selection, Selection::Unselected);
    }

    #[test]
    fn dismiss_when_unselected_is_a_no_op() {
        let mut selection = Selection::Unselected;
        selection.dismiss();
        assert!(!selection.is_inspecting());
    }
}
