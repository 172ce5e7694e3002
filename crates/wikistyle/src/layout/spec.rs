//! Computed render directives.

use serde::Serialize;

use crate::color::ColorPair;
use crate::error::Result;
use crate::kind::ObjectKind;
use crate::stylesheet::inline_declarations;

/// What a node is, for the rendering layer to pick an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Nav,
    Main,
    VBox,
    HBox,
    Link,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Column,
    Row,
}

impl Flow {
    fn as_css(self) -> &'static str {
        match self {
            Flow::Column => "column",
            Flow::Row => "row",
        }
    }

    /// Edge that faces the previous sibling along this axis.
    pub fn leading_edge(self) -> Edge {
        match self {
            Flow::Column => Edge::Top,
            Flow::Row => Edge::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Left,
}

impl Edge {
    fn as_css(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "policy", content = "px")]
pub enum Width {
    /// Sized by the flex algorithm.
    Auto,
    /// Fixed pixel width, never grows or shrinks.
    Fixed(u32),
}

/// Gap between a box child and its previous sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LeadingGap {
    pub edge: Edge,
    pub px: u32,
}

/// Ready-to-apply visual directives for one layout node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSpec {
    pub role: Role,
    /// Set for links; `None` on an unclassified link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ObjectKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Set for containers that lay out their children with flex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<Flow>,
    pub flex_grow: u32,
    pub width: Width,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Edge>,
    /// Uniform margin on all sides, in pixels.
    pub margin: u32,
    /// Set when the parent is a box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading: Option<LeadingGap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPair>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderSpec>,
}

impl RenderSpec {
    pub(crate) fn new(role: Role) -> Self {
        Self {
            role,
            kind: None,
            label: None,
            flow: None,
            flex_grow: 0,
            width: Width::Auto,
            pinned: None,
            margin: 0,
            leading: None,
            colors: None,
            children: Vec::new(),
        }
    }

    /// Pixels between this node and its previous sibling; 0 outside a box.
    pub fn leading_gap(&self) -> u32 {
        self.leading.map_or(0, |gap| gap.px)
    }

    /// CSS declarations for this node alone, in a stable order.
    ///
    /// The hover color cannot be expressed inline; renderers that need it
    /// should use the kind class with the generated stylesheet.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();

        if let Some(flow) = self.flow {
            out.push(("display", "flex".to_string()));
            out.push(("flex-direction", flow.as_css().to_string()));
        }
        out.push(("flex-grow", self.flex_grow.to_string()));
        if let Width::Fixed(px) = self.width {
            out.push(("flex-shrink", "0".to_string()));
            out.push(("width", format!("{}px", px)));
        }
        if let Some(edge) = self.pinned {
            out.push(("position", "sticky".to_string()));
            if edge != Edge::Top {
                out.push(("top", "0".to_string()));
            }
            out.push((edge.as_css(), "0".to_string()));
        }
        if self.margin > 0 {
            out.push(("margin", format!("{}px", self.margin)));
        }
        if let Some(gap) = self.leading {
            let property = match gap.edge {
                Edge::Top => "margin-top",
                Edge::Left => "margin-left",
            };
            out.push((property, format!("{}px", gap.px)));
        }
        if let Some(colors) = self.colors {
            out.push(("background-color", colors.base.to_string()));
        }

        out
    }

    /// [`declarations`](Self::declarations) as a `style` attribute value.
    pub fn inline_style(&self) -> String {
        inline_declarations(&self.declarations())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
