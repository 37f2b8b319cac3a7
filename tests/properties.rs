//! Property tests over randomly shaped forests.
use kodama::prelude::*;
use proptest::prelude::*;

fn status() -> impl Strategy<Value = NodeStatus> {
    prop_oneof![
        Just(NodeStatus::Active),
        Just(NodeStatus::Inactive),
        Just(NodeStatus::Error),
    ]
}

fn node_type() -> impl Strategy<Value = NodeType> {
    prop_oneof![
        Just(NodeType::Trigger),
        Just(NodeType::Condition),
        Just(NodeType::Action),
        Just(NodeType::Branch),
    ]
}

/// Trees with placeholder ids; `assign_ids` makes them unique afterwards.
fn tree() -> impl Strategy<Value = LogicNode> {
    let leaf = (node_type(), status(), proptest::option::of(0.0f64..=100.0)).prop_map(
        |(node_type, status, rate)| {
            let node = LogicNode::new("", node_type, status, "node");
            match rate {
                Some(rate) => node.with_metadata(NodeMetadata {
                    success_rate: Some(rate),
                    ..Default::default()
                }),
                None => node,
            }
        },
    );
    leaf.prop_recursive(4, 32, 4, |inner| {
        (node_type(), status(), prop::collection::vec(inner, 0..4)).prop_map(
            |(node_type, status, children)| {
                LogicNode::new("", node_type, status, "node").with_children(children)
            },
        )
    })
}

fn assign_ids(roots: &mut [LogicNode]) {
    let mut next = 0usize;
    let mut stack: Vec<&mut LogicNode> = roots.iter_mut().collect();
    while let Some(node) = stack.pop() {
        next += 1;
        node.id = NodeId::new(format!("n{}", next));
        stack.extend(node.children.iter_mut());
    }
}

fn forest() -> impl Strategy<Value = Forest> {
    prop::collection::vec(tree(), 0..6).prop_map(|mut roots| {
        assign_ids(&mut roots);
        Forest::new(roots).unwrap()
    })
}

proptest! {
    #[test]
    fn root_counters_partition_roots(forest in forest()) {
        let stats = ForestStats::compute(forest.roots());
        prop_assert_eq!(stats.active + stats.inactive + stats.error, forest.len());
        for status in NodeStatus::ALL {
            let expected = forest.roots().iter().filter(|r| r.status == status).count();
            prop_assert_eq!(stats.count(status), expected);
        }
    }

    #[test]
    fn every_node_renders_once_with_proportional_indent(forest in forest(), unit in 0usize..8) {
        let rows = TreeRenderer::new(RenderOptions::default().with_indent_unit(unit)).render(&forest);
        prop_assert_eq!(rows.len(), forest.node_count());
        for row in &rows {
            prop_assert_eq!(row.indent, row.depth * unit);
            prop_assert!(forest.get(row.node_id().as_str()).is_some());
        }
    }

    #[test]
    fn clicking_any_row_inspects_that_node(forest in forest()) {
        let mut view = LogicTreeView::new(forest.clone());
        for row in TreeRenderer::default().render(&forest) {
            prop_assert!(view.click(row.node_id().as_str()));
            let panel = view.detail().unwrap();
            prop_assert_eq!(panel.id(), row.node_id());
        }
        view.dismiss();
        prop_assert!(view.detail().is_none());
    }

    #[test]
    fn success_tone_matches_threshold(rate in 0.0f64..=100.0) {
        let expected = if rate >= 90.0 { RateTone::Good } else { RateTone::Bad };
        prop_assert_eq!(classify_success_rate(rate), expected);
    }
}
