//! Layout trees and the render directives computed from them.
//!
//! ## Rules
//!
//! - **NavRail**: never grows (`flex-grow: 0`), fixed width, pinned to the
//!   leading edge. This holds wherever the rail is placed, including inside
//!   a box.
//! - **MainArea**: grows (`flex-grow: 1`) with a small uniform margin.
//! - **VBox / HBox**: flex column / row. Every child grows with equal weight.
//!   Each child also gets a leading gap on the box's main axis: `0` for the
//!   first child, the theme's box gap for every later child. Skipping the gap
//!   on the first child keeps nested boxes from stacking margins.
//! - **Link**: carries its kind and that kind's colors for the active mode.
//!   A link with no kind gets no colors.
//!
//! Layout is a pure function of the tree, the theme and the mode.
//!
//! ```rust
//! use wikistyle::{layout, LayoutNode};
//!
//! let tree = LayoutNode::VBox(vec![
//!     LayoutNode::link("Joe", "atom"),
//!     LayoutNode::link("Friend of", "relation"),
//! ]);
//! let spec = layout(&tree);
//! assert_eq!(spec.children[0].leading_gap(), 0);
//! assert!(spec.children[1].leading_gap() > 0);
//! ```

mod node;
mod spec;

pub use node::LayoutNode;
pub use spec::{Edge, Flow, LeadingGap, RenderSpec, Role, Width};

use crate::theme::{ColorMode, Theme};

/// Flex weight given to every growing node.
pub const GROW_WEIGHT: u32 = 1;

/// Computes the render spec of `node` with `theme` in `mode`.
pub fn layout_with(node: &LayoutNode, theme: &Theme, mode: ColorMode) -> RenderSpec {
    let metrics = theme.metrics();

    match node {
        LayoutNode::NavRail(children) => {
            let mut spec = RenderSpec::new(Role::Nav);
            spec.flex_grow = 0;
            spec.width = Width::Fixed(metrics.nav_width);
            spec.pinned = Some(Edge::Left);
            spec.children = layout_all(children, theme, mode);
            spec
        }
        LayoutNode::MainArea(children) => {
            let mut spec = RenderSpec::new(Role::Main);
            spec.flex_grow = GROW_WEIGHT;
            spec.margin = metrics.main_margin;
            spec.children = layout_all(children, theme, mode);
            spec
        }
        LayoutNode::VBox(children) => layout_box(Role::VBox, Flow::Column, children, theme, mode),
        LayoutNode::HBox(children) => layout_box(Role::HBox, Flow::Row, children, theme, mode),
        LayoutNode::Link { label, kind } => {
            let mut spec = RenderSpec::new(Role::Link);
            spec.label = Some(label.clone());
            spec.kind = *kind;
            spec.colors = kind.map(|kind| theme.color_for_mode(kind, mode));
            spec
        }
    }
}

/// Computes the render spec of `node` with the built-in theme in light mode.
pub fn layout(node: &LayoutNode) -> RenderSpec {
    crate::resolver::default_resolver().layout(node)
}

fn layout_all(children: &[LayoutNode], theme: &Theme, mode: ColorMode) -> Vec<RenderSpec> {
    children
        .iter()
        .map(|child| layout_with(child, theme, mode))
        .collect()
}

fn layout_box(
    role: Role,
    flow: Flow,
    children: &[LayoutNode],
    theme: &Theme,
    mode: ColorMode,
) -> RenderSpec {
    let gap = theme.metrics().box_gap;
    let edge = flow.leading_edge();

    let mut spec = RenderSpec::new(role);
    spec.flow = Some(flow);
    spec.children = children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let mut child_spec = layout_with(child, theme, mode);
            if child_spec.role != Role::Nav {
                child_spec.flex_grow = GROW_WEIGHT;
            }
            let px = if index == 0 { 0 } else { gap };
            child_spec.leading = Some(LeadingGap { edge, px });
            child_spec
        })
        .collect();
    spec
}
