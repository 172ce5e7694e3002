//! Property-based tests for layout using proptest.

use proptest::prelude::*;
use wikistyle::{layout_with, ColorMode, LayoutMetrics, LayoutNode, RenderSpec, Role, Theme};

// ============================================================================
// Strategies
// ============================================================================

fn tag_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("atom"),
        Just("relation"),
        Just("abstract"),
        Just("page"),
        Just(""),
    ]
}

fn node_strategy() -> impl Strategy<Value = LayoutNode> {
    let leaf = ("[a-zA-Z ]{1,12}", tag_strategy())
        .prop_map(|(label, tag)| LayoutNode::link(label, tag));

    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(LayoutNode::VBox),
            prop::collection::vec(inner.clone(), 0..5).prop_map(LayoutNode::HBox),
            prop::collection::vec(inner.clone(), 0..3).prop_map(LayoutNode::NavRail),
            prop::collection::vec(inner, 0..3).prop_map(LayoutNode::MainArea),
        ]
    })
}

fn mode_strategy() -> impl Strategy<Value = ColorMode> {
    prop_oneof![Just(ColorMode::Light), Just(ColorMode::Dark)]
}

fn metrics_strategy() -> impl Strategy<Value = LayoutMetrics> {
    (0u32..400, 0u32..32, 1u32..32).prop_map(|(nav_width, main_margin, box_gap)| LayoutMetrics {
        nav_width,
        main_margin,
        box_gap,
    })
}

fn walk<'a>(spec: &'a RenderSpec, out: &mut Vec<&'a RenderSpec>) {
    out.push(spec);
    for child in &spec.children {
        walk(child, out);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Laying out the same tree twice gives the same result.
    #[test]
    fn layout_is_pure(node in node_strategy(), mode in mode_strategy()) {
        let theme = Theme::new();
        prop_assert_eq!(layout_with(&node, &theme, mode), layout_with(&node, &theme, mode));
    }

    /// In every box, only the first child has a zero leading gap.
    #[test]
    fn only_first_box_child_skips_gap(node in node_strategy(), metrics in metrics_strategy()) {
        let theme = Theme::new().with_metrics(metrics);
        let spec = layout_with(&node, &theme, ColorMode::Light);

        let mut all = Vec::new();
        walk(&spec, &mut all);
        for parent in all {
            let is_box = matches!(parent.role, Role::VBox | Role::HBox);
            for (i, child) in parent.children.iter().enumerate() {
                if is_box {
                    let expected = if i == 0 { 0 } else { metrics.box_gap };
                    prop_assert_eq!(child.leading_gap(), expected);
                } else {
                    prop_assert!(child.leading.is_none());
                }
            }
        }
    }

    /// Navigation rails never grow; main areas always do.
    #[test]
    fn rail_never_grows_main_always_grows(node in node_strategy()) {
        let spec = layout_with(&node, &Theme::new(), ColorMode::Light);

        let mut all = Vec::new();
        walk(&spec, &mut all);
        for s in all {
            match s.role {
                Role::Nav => prop_assert_eq!(s.flex_grow, 0),
                Role::Main => prop_assert!(s.flex_grow > 0),
                _ => {}
            }
        }
    }

    /// The render tree mirrors the layout tree node for node.
    #[test]
    fn render_tree_mirrors_layout_tree(node in node_strategy()) {
        fn count(node: &LayoutNode) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }

        let spec = layout_with(&node, &Theme::new(), ColorMode::Dark);
        let mut all = Vec::new();
        walk(&spec, &mut all);
        prop_assert_eq!(all.len(), count(&node));
    }
}
