use crate::node::{LogicNode, NodeMetadata, NodeStatus, NodeType};

fn node(
    id: &str,
    node_type: NodeType,
    status: NodeStatus,
    title: &str,
    description: &str,
) -> LogicNode {
    LogicNode::new(id, node_type, status, title).with_description(description)
}

fn metadata(
    trigger_count: Option<u64>,
    success_rate: f64,
    last_triggered: Option<&str>,
) -> NodeMetadata {
    NodeMetadata {
        trigger_count,
        success_rate: Some(success_rate),
        last_triggered: last_triggered.map(str::to_string),
    }
}

/// The three logic trees shown on the live-operations dashboard.
pub fn live_ops_trees() -> Vec<LogicNode> {
    use NodeStatus::{Active, Error};
    use NodeType::{Action, Branch, Condition, Trigger};

    vec![
        node(
            "tree-1",
            Trigger,
            Active,
            "Season Progression System",
            "Main progression logic for seasonal events",
        )
        .with_metadata(metadata(Some(15420), 98.5, Some("2 minutes ago")))
        .with_children(vec![
            node(
                "node-1-1",
                Condition,
                Active,
                "Check Player Level",
                "Verify player meets minimum level requirement",
            )
            .with_metadata(metadata(None, 95.2, None))
            .with_children(vec![
                node(
                    "node-1-1-1",
                    Action,
                    Active,
                    "Grant Season Access",
                    "Unlock seasonal content and challenges",
                ),
                node(
                    "node-1-1-2",
                    Action,
                    Active,
                    "Show Level Requirement",
                    "Display message about level requirements",
                ),
            ]),
            node(
                "node-1-2",
                Condition,
                Active,
                "Check Previous Season Completion",
                "Verify if player completed previous season",
            )
            .with_metadata(metadata(None, 87.3, None))
            .child(node(
                "node-1-2-1",
                Action,
                Active,
                "Award Carryover Bonus",
                "Grant bonus rewards for returning players",
            )),
        ]),
        node(
            "tree-2",
            Trigger,
            Active,
            "Challenge Completion Handler",
            "Processes challenge completions and rewards",
        )
        .with_metadata(metadata(Some(8920), 99.1, Some("5 minutes ago")))
        .child(
            node(
                "node-2-1",
                Condition,
                Active,
                "Validate Challenge Criteria",
                "Ensure all challenge requirements are met",
            )
            .with_metadata(metadata(None, 96.8, None))
            .with_children(vec![
                node(
                    "node-2-1-1",
                    Branch,
                    Active,
                    "Reward Distribution",
                    "Branch based on challenge tier",
                )
                .with_children(vec![
                    node(
                        "node-2-1-1-1",
                        Action,
                        Active,
                        "Grant Premium Rewards",
                        "Award top-tier rewards",
                    ),
                    node(
                        "node-2-1-1-2",
                        Action,
                        Active,
                        "Grant Standard Rewards",
                        "Award standard rewards",
                    ),
                ]),
                node(
                    "node-2-1-2",
                    Action,
                    Active,
                    "Log Completion Event",
                    "Record challenge completion in analytics",
                ),
            ]),
        ),
        node(
            "tree-3",
            Trigger,
            Error,
            "Economy Fail-Safe System",
            "Prevents currency exploits and maintains balance",
        )
        .with_metadata(metadata(Some(234), 78.2, Some("1 hour ago")))
        .child(
            node(
                "node-3-1",
                Condition,
                Error,
                "Check Transaction Amount",
                "Validate transaction is within normal range",
            )
            .with_metadata(metadata(None, 78.2, None))
            .child(node(
                "node-3-1-1",
                Action,
                Error,
                "Flag Suspicious Activity",
                "Alert system administrators",
            )),
        ),
    ]
}
