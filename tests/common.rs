//! Common test utilities for building logic forests.
use kodama::prelude::*;

/// The two-node forest used throughout the selection and counter tests.
///
/// `r1` (active trigger) -> `c1` (error action)
#[allow(dead_code)]
pub fn create_scenario_forest() -> Forest {
    Forest::new(vec![
        LogicNode::new("r1", NodeType::Trigger, NodeStatus::Active, "Root trigger").child(
            LogicNode::new("c1", NodeType::Action, NodeStatus::Error, "Failing action")
                .with_description("Always fails"),
        ),
    ])
    .unwrap()
}

/// Builds a node with only a success rate in its metadata.
#[allow(dead_code)]
pub fn node_with_rate(id: &str, rate: f64) -> LogicNode {
    LogicNode::new(id, NodeType::Condition, NodeStatus::Active, id).with_metadata(NodeMetadata {
        success_rate: Some(rate),
        ..Default::default()
    })
}

/// A forest mixing every node type and status, with uneven depth.
#[allow(dead_code)]
pub fn create_mixed_forest() -> Forest {
    Forest::new(vec![
        LogicNode::new("a", NodeType::Trigger, NodeStatus::Active, "A")
            .child(
                LogicNode::new("a1", NodeType::Branch, NodeStatus::Inactive, "A1")
                    .child(LogicNode::new("a1a", NodeType::Action, NodeStatus::Error, "A1a"))
                    .child(LogicNode::new("a1b", NodeType::Action, NodeStatus::Active, "A1b")),
            )
            .child(LogicNode::new("a2", NodeType::Condition, NodeStatus::Active, "A2")),
        LogicNode::new("b", NodeType::Trigger, NodeStatus::Inactive, "B"),
        LogicNode::new("c", NodeType::Trigger, NodeStatus::Error, "C")
            .child(LogicNode::new("c1", NodeType::Condition, NodeStatus::Active, "C1")),
    ])
    .unwrap()
}

#[allow(dead_code)]
pub const SIMPLE_FOREST_JSON: &str = r#"[
  {
    "id": "tree-1",
    "type": "trigger",
    "title": "Season Progression System",
    "description": "Main progression logic for seasonal events",
    "status": "active",
    "metadata": { "triggerCount": 15420, "successRate": 98.5, "lastTriggered": "2 minutes ago" },
    "children": [
      {
        "id": "node-1-1",
        "type": "condition",
        "title": "Check Player Level",
        "description": "Verify player meets minimum level requirement",
        "status": "active",
        "metadata": { "successRate": 87.3 },
        "children": []
      }
    ]
  },
  {
    "id": "tree-3",
    "type": "trigger",
    "title": "Economy Fail-Safe System",
    "description": "Prevents currency exploits and maintains balance",
    "status": "error",
    "metadata": { "triggerCount": 234 }
  }
]"#;
