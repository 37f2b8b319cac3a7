use super::model::{LogicNode, NodeId};
use crate::error::ForestError;
use ahash::AHashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// An ordered sequence of independent logic trees, validated and indexed by node id.
///
/// A `Forest` can only be built through [`Forest::new`] (or the JSON loaders built on it),
/// so every instance upholds the forest invariants: non-empty ids, unique across all trees.
/// Acyclicity and single ownership follow from `LogicNode` owning its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    roots: Vec<LogicNode>,
    index: AHashMap<NodeId, Slot>,
    depth: usize,
}

/// Where a node sits: its parent (`None` for roots) and its position among its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    parent: Option<NodeId>,
    position: usize,
}

impl Forest {
    /// Validates the given roots and builds the id index.
    pub fn new(roots: Vec<LogicNode>) -> Result<Self, ForestError> {
        let (index, depth) = Self::build_index(&roots)?;
        Ok(Self {
            roots,
            index,
            depth,
        })
    }

    /// Parses a JSON array of root nodes.
    pub fn from_json(json: &str) -> Result<Self, ForestError> {
        let roots: Vec<LogicNode> =
            serde_json::from_str(json).map_err(|e| ForestError::JsonParseError(e.to_string()))?;
        let forest = Self::new(roots)?;
        info!(
            roots = forest.len(),
            nodes = forest.node_count(),
            "loaded logic forest"
        );
        Ok(forest)
    }

    /// Loads a forest from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ForestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ForestError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Serializes the roots back into pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ForestError> {
        serde_json::to_string_pretty(&self.roots)
            .map_err(|e| ForestError::JsonSerializeError(e.to_string()))
    }

    pub fn roots(&self) -> &[LogicNode] {
        &self.roots
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of nodes across every tree, roots included.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up any node in the forest by id, following parent links up to its root.
    pub fn get(&self, id: &str) -> Option<&LogicNode> {
        let mut slot = self.index.get(id)?;
        let mut positions = vec![slot.position];
        while let Some(parent) = &slot.parent {
            slot = self.index.get(parent.as_str())?;
            positions.push(slot.position);
        }

        let mut node = self.roots.get(positions.pop()?)?;
        while let Some(position) = positions.pop() {
            node = node.children.get(position)?;
        }
        Some(node)
    }

    /// Depth of the deepest node, where roots sit at depth 0. An empty forest has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn into_roots(self) -> Vec<LogicNode> {
        self.roots
    }

    fn build_index(
        roots: &[LogicNode],
    ) -> Result<(AHashMap<NodeId, Slot>, usize), ForestError> {
        let mut index = AHashMap::new();
        let mut depth = 0;
        let mut stack: Vec<(&LogicNode, Option<&NodeId>, usize, usize)> = roots
            .iter()
            .enumerate()
            .rev()
            .map(|(position, node)| (node, None, position, 0))
            .collect();

        while let Some((node, parent, position, level)) = stack.pop() {
            if node.id.as_str().is_empty() {
                return Err(ForestError::EmptyId {
                    parent: parent.cloned(),
                });
            }
            let slot = Slot {
                parent: parent.cloned(),
                position,
            };
            if index.insert(node.id.clone(), slot).is_some() {
                return Err(ForestError::DuplicateId(node.id.clone()));
            }
            depth = depth.max(level);
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push((child, Some(&node.id), i, level + 1));
            }
        }
        Ok((index, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeStatus, NodeType};

    fn leaf(id: &str) -> LogicNode {
        LogicNode::new(id, NodeType::Action, NodeStatus::Active, id)
    }

    #[test]
    fn lookup_finds_nested_nodes() {
        let forest = Forest::new(vec![
            leaf("r1").child(leaf("c1").child(leaf("g1"))),
            leaf("r2"),
        ])
        .unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.node_count(), 4);
        assert_eq!(forest.get("g1").map(|n| n.id.as_str()), Some("g1"));
        assert_eq!(forest.get("r2").map(|n| n.id.as_str()), Some("r2"));
        assert!(forest.get("missing").is_none());
        assert_eq!(forest.depth(), 2);
    }

    #[test]
    fn duplicate_ids_across_trees_are_rejected() {
        let err = Forest::new(vec![leaf("r1").child(leaf("x")), leaf("r2").child(leaf("x"))])
            .unwrap_err();
        assert_eq!(err, ForestError::DuplicateId(NodeId::new("x")));
    }

    #[test]
    fn empty_child_id_reports_parent() {
        let err = Forest::new(vec![leaf("r1").child(leaf(""))]).unwrap_err();
        assert_eq!(
            err,
            ForestError::EmptyId {
                parent: Some(NodeId::new("r1"))
            }
        );
        assert!(err.to_string().contains("r1"));
    }

    #[test]
    fn very_deep_chain_is_indexed() {
        const DEPTH: usize = 100_000;
        let mut tree = leaf("n0");
        for i in 1..DEPTH {
            tree = leaf(&format!("n{}", i)).child(tree);
        }
        let forest = Forest::new(vec![tree, leaf("other")]).unwrap();

        assert_eq!(forest.node_count(), DEPTH + 1);
        assert_eq!(forest.depth(), DEPTH - 1);
        assert_eq!(forest.get("n0").map(|n| n.is_leaf()), Some(true));
        assert_eq!(
            forest.get("n1").map(|n| n.children[0].id.as_str()),
            Some("n0")
        );
        assert_eq!(forest.get("other").map(|n| n.id.as_str()), Some("other"));
    }

    #[test]
    fn empty_forest_is_valid() {
        let forest = Forest::new(vec![]).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.depth(), 0);
    }
}
