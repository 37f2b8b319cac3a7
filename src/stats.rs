use crate::node::{LogicNode, NodeStatus};

/// Counters over the root level of a forest. Descendants never contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestStats {
    pub total_roots: usize,
    pub active: usize,
    pub inactive: usize,
    pub error: usize,
    /// Sum of the roots' trigger counts, saturating at `u64::MAX`. Roots without one add nothing.
    pub total_triggers: u64,
}

impl ForestStats {
    pub fn compute(roots: &[LogicNode]) -> Self {
        roots.iter().fold(
            Self {
                total_roots: roots.len(),
                ..Self::default()
            },
            |mut stats, root| {
                match root.status {
                    NodeStatus::Active => stats.active += 1,
                    NodeStatus::Inactive => stats.inactive += 1,
                    NodeStatus::Error => stats.error += 1,
                }
                stats.total_triggers = stats
                    .total_triggers
                    .saturating_add(root.trigger_count().unwrap_or(0));
                stats
            },
        )
    }

    pub fn count(&self, status: NodeStatus) -> usize {
        match status {
            NodeStatus::Active => self.active,
            NodeStatus::Inactive => self.inactive,
            NodeStatus::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeMetadata, NodeType};

    #[test]
    fn nested_statuses_are_ignored() {
        let roots = vec![
            LogicNode::new("r1", NodeType::Trigger, NodeStatus::Active, "r1").child(
                LogicNode::new("c1", NodeType::Action, NodeStatus::Error, "c1"),
            ),
        ];
        let stats = ForestStats::compute(&roots);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.error, 0);
        assert_eq!(stats.total_roots, 1);
    }

    #[test]
    fn triggers_are_summed_over_roots() {
        let with_count = |id: &str, count| {
            LogicNode::new(id, NodeType::Trigger, NodeStatus::Active, id).with_metadata(
                NodeMetadata {
                    trigger_count: Some(count),
                    ..Default::default()
                },
            )
        };
        let roots = vec![
            with_count("a", 15420),
            with_count("b", 8920),
            with_count("c", 234).child(with_count("nested", 1_000_000)),
            LogicNode::new("d", NodeType::Trigger, NodeStatus::Inactive, "d"),
        ];
        let stats = ForestStats::compute(&roots);
        assert_eq!(stats.total_triggers, 24_574);
        assert_eq!(stats.count(NodeStatus::Inactive), 1);
    }

    #[test]
    fn trigger_total_saturates() {
        let huge = |id: &str| {
            LogicNode::new(id, NodeType::Trigger, NodeStatus::Active, id).with_metadata(
                NodeMetadata {
                    trigger_count: Some(u64::MAX),
                    ..Default::default()
                },
            )
        };
        let stats = ForestStats::compute(&[huge("a"), huge("b")]);
        assert_eq!(stats.total_triggers, u64::MAX);
        assert_eq!(stats.active, 2);
    }

    #[test]
    fn empty_forest() {
        assert_eq!(ForestStats::compute(&[]), ForestStats::default());
    }
}
