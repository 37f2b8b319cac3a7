use crate::node::{Forest, NodeId};
use crate::render::{NodeRow, RenderOptions, TextFormatter, TreeRenderer};
use crate::selection::{DetailPanel, Selection};
use crate::stats::ForestStats;
use tracing::warn;

/// The logic-tree screen: owns the forest, the current selection and the root counters.
///
/// The selection is only changed through [`LogicTreeView::click`] and
/// [`LogicTreeView::dismiss`]; rendering borrows the forest and never touches it.
#[derive(Debug, Clone, Default)]
pub struct LogicTreeView {
    forest: Forest,
    selection: Selection,
    stats: ForestStats,
    renderer: TreeRenderer,
}

impl LogicTreeView {
    pub fn new(forest: Forest) -> Self {
        Self::with_options(forest, RenderOptions::default())
    }

    pub fn with_options(forest: Forest, options: RenderOptions) -> Self {
        let stats = ForestStats::compute(forest.roots());
        Self {
            forest,
            selection: Selection::Unselected,
            stats,
            renderer: TreeRenderer::new(options),
        }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn stats(&self) -> &ForestStats {
        &self.stats
    }

    /// Replaces the forest and recomputes the counters. A selection whose node is not
    /// in the new forest is dropped.
    pub fn set_forest(&mut self, forest: Forest) {
        self.stats = ForestStats::compute(forest.roots());
        let stale = self
            .selection
            .current()
            .is_some_and(|id| !forest.contains(id.as_str()));
        if stale {
            self.selection.dismiss();
        }
        self.forest = forest;
    }

    pub fn rows(&self) -> Vec<NodeRow<'_>> {
        self.renderer.render(&self.forest)
    }

    /// Selects the node whose row was clicked. Returns `false`, leaving the selection
    /// untouched, if no row carries that id.
    pub fn click(&mut self, id: &str) -> bool {
        if !self.forest.contains(id) {
            warn!(node = id, "click on unknown node ignored");
            return false;
        }
        self.selection.select(NodeId::new(id));
        true
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    pub fn detail(&self) -> Option<DetailPanel<'_>> {
        DetailPanel::project(&self.forest, &self.selection)
    }

    /// The full screen as text: counters, the tree listing, then the detail panel if open.
    pub fn to_text(&self) -> String {
        let mut output = TextFormatter::format_stats(&self.stats);
        output.push('\n');
        output.push_str(&TextFormatter::format_rows(
            &self.rows(),
            self.renderer.options(),
        ));
        if let Some(panel) = self.detail() {
            output.push('\n');
            output.push_str(&TextFormatter::format_detail(&panel));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LogicNode, NodeStatus, NodeType};

    fn forest(ids: &[&str]) -> Forest {
        Forest::new(
            ids.iter()
                .map(|id| LogicNode::new(*id, NodeType::Trigger, NodeStatus::Active, *id))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_click_keeps_selection() {
        let mut view = LogicTreeView::new(forest(&["a", "b"]));
        assert!(view.click("a"));
        assert!(!view.click("zzz"));
        assert_eq!(view.selection(), &Selection::Inspecting(NodeId::new("a")));
    }

    #[test]
    fn replacing_forest_recomputes_counters_and_drops_stale_selection() {
        let mut view = LogicTreeView::new(forest(&["a", "b"]));
        view.click("a");
        view.set_forest(forest(&["b", "c", "d"]));
        assert_eq!(view.stats().active, 3);
        assert_eq!(view.selection(), &Selection::Unselected);
    }

    #[test]
    fn replacing_forest_keeps_surviving_selection() {
        let mut view = LogicTreeView::new(forest(&["a", "b"]));
        view.click("b");
        view.set_forest(forest(&["b"]));
        assert_eq!(view.detail().map(|p| p.id().clone()), Some(NodeId::new("b")));
    }

    #[test]
    fn replacing_a_deep_forest_releases_it() {
        let mut tree = LogicNode::new("n0", NodeType::Action, NodeStatus::Active, "n0");
        for i in 1..100_000 {
            let id = format!("n{}", i);
            tree = LogicNode::new(id.as_str(), NodeType::Condition, NodeStatus::Error, id.as_str())
                .child(tree);
        }
        let mut view = LogicTreeView::new(Forest::new(vec![tree]).unwrap());
        assert!(view.click("n0"));
        assert_eq!(view.stats().error, 1);

        view.set_forest(forest(&["a"]));
        assert_eq!(view.forest().node_count(), 1);
        assert_eq!(view.selection(), &Selection::Unselected);
    }
}
