//! Declarative layout tree.

use crate::kind::{classify, ObjectKind};

/// A node in the layout tree of one rendered view.
///
/// Parents own their children; a tree is built per view and dropped when the
/// view is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    /// Fixed-width navigation rail pinned to the leading edge.
    NavRail(Vec<LayoutNode>),
    /// Main content region, grows to fill the remaining width.
    MainArea(Vec<LayoutNode>),
    /// Column of children sharing height equally.
    VBox(Vec<LayoutNode>),
    /// Row of children sharing width equally.
    HBox(Vec<LayoutNode>),
    /// A link to a wiki object. Unclassified links render unstyled.
    Link {
        label: String,
        kind: Option<ObjectKind>,
    },
}

impl LayoutNode {
    /// The page root: navigation rail and main area side by side.
    pub fn page(nav: Vec<LayoutNode>, main: Vec<LayoutNode>) -> Self {
        LayoutNode::HBox(vec![LayoutNode::NavRail(nav), LayoutNode::MainArea(main)])
    }

    /// A link whose kind is parsed from a markup tag.
    pub fn link(label: impl Into<String>, tag: &str) -> Self {
        LayoutNode::Link {
            label: label.into(),
            kind: classify(tag),
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::NavRail(children)
            | LayoutNode::MainArea(children)
            | LayoutNode::VBox(children)
            | LayoutNode::HBox(children) => children,
            LayoutNode::Link { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_puts_rail_before_main() {
        let page = LayoutNode::page(vec![], vec![LayoutNode::link("Joe", "atom")]);
        match page {
            LayoutNode::HBox(children) => {
                assert!(matches!(children[0], LayoutNode::NavRail(_)));
                assert!(matches!(children[1], LayoutNode::MainArea(_)));
                assert_eq!(children[1].children().len(), 1);
            }
            other => panic!("Expected HBox, got {:?}", other),
        }
    }

    #[test]
    fn test_link_classifies_tag() {
        assert_eq!(
            LayoutNode::link("Friend of", "relation"),
            LayoutNode::Link {
                label: "Friend of".to_string(),
                kind: Some(ObjectKind::Relation)
            }
        );
        assert_eq!(
            LayoutNode::link("?", "page"),
            LayoutNode::Link {
                label: "?".to_string(),
                kind: None
            }
        );
    }
}
