//! Depth-first rendering of a logic forest into indented rows.

pub mod formatter;
pub mod row;

pub use formatter::TextFormatter;
pub use row::*;

use crate::classify::{GlyphSet, classify_status, classify_type};
use crate::node::{Forest, LogicNode};
use tracing::debug;

/// Layout settings shared by the renderer and the text formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Columns of indentation added per level of depth.
    pub indent_unit: usize,
    pub glyphs: GlyphSet,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            glyphs: GlyphSet::Unicode,
        }
    }
}

impl RenderOptions {
    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }
}

/// Walks logic trees in pre-order and produces one [`NodeRow`] per node.
///
/// Traversal uses an explicit `(node, depth)` stack, so arbitrarily deep trees never
/// grow the call stack. Siblings keep their array order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders every tree of the forest, one after the other.
    pub fn render<'a>(&self, forest: &'a Forest) -> Vec<NodeRow<'a>> {
        let span = tracing::debug_span!("forest.render", roots = forest.len());
        let _guard = span.enter();

        let mut rows = Vec::with_capacity(forest.node_count());
        for root in forest.roots() {
            self.walk(root, &mut rows);
        }
        debug!(
            rows = rows.len(),
            max_depth = rows.iter().map(|r| r.depth).max().unwrap_or(0),
            "rendered logic forest"
        );
        rows
    }

    /// Renders a single tree rooted at `root`, which is placed at depth 0.
    pub fn render_tree<'a>(&self, root: &'a LogicNode) -> Vec<NodeRow<'a>> {
        let mut rows = Vec::new();
        self.walk(root, &mut rows);
        rows
    }

    fn walk<'a>(&self, root: &'a LogicNode, rows: &mut Vec<NodeRow<'a>>) {
        let mut stack: Vec<(&'a LogicNode, usize)> = vec![(root, 0)];
        while let Some((node, depth)) = stack.pop() {
            rows.push(self.row(node, depth));
            // Reversed so the first child is popped first.
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
    }

    fn row<'a>(&self, node: &'a LogicNode, depth: usize) -> NodeRow<'a> {
        NodeRow {
            node,
            depth,
            indent: depth * self.options.indent_unit,
            type_icon: classify_type(node.node_type).icon,
            status: classify_status(node.status),
            summary: MetadataSummary::from_metadata(node.metadata.as_ref()),
            expandable: !node.is_leaf(),
        }
    }
}
