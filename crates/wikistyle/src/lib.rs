//! # wikistyle - Object-Kind Theming for a Wiki Viewer
//!
//! `wikistyle` decides how a wiki object viewer looks: which colors each kind
//! of object gets, and how the page is split into a navigation rail, a main
//! area and nested flex boxes. It produces directives and stylesheets; the
//! rendering itself is left to whatever generates the HTML.
//!
//! ## Core Concepts
//!
//! - [`ObjectKind`]: closed set of object kinds (atom, relation, abstract)
//! - [`ColorPair`]: base and hover colors of a kind
//! - [`Theme`]: kind colors, dark-mode overrides and layout metrics
//! - [`LayoutNode`]: declarative layout tree of one view
//! - [`RenderSpec`]: computed directives for a layout tree
//! - [`ThemeResolver`]: a theme and a color mode, ready to answer lookups
//!
//! ## Quick Start
//!
//! ```rust
//! use wikistyle::{classify, color_for, layout, LayoutNode, ObjectKind};
//!
//! // Kind colors
//! let kind = classify("atom").unwrap();
//! let pair = color_for(kind);
//! assert_ne!(pair.base, pair.hover);
//!
//! // Unknown tags degrade to unstyled
//! assert_eq!(classify("page"), None);
//!
//! // Layout
//! let page = LayoutNode::page(
//!     vec![LayoutNode::link("Index", "abstract")],
//!     vec![LayoutNode::VBox(vec![
//!         LayoutNode::link("Joe", "atom"),
//!         LayoutNode::link("Friend of", "relation"),
//!     ])],
//! );
//! let spec = layout(&page);
//! let (nav, main) = (&spec.children[0], &spec.children[1]);
//! assert_eq!(nav.flex_grow, 0);
//! assert!(main.flex_grow > 0);
//! ```
//!
//! ## Custom Themes
//!
//! ```rust
//! use wikistyle::{ObjectKind, Theme, ThemeResolver};
//!
//! let theme = Theme::from_yaml(r##"
//! kinds:
//!   atom: { base: "#eef", hover: "#ccf" }
//! layout:
//!   nav_width: 240
//! "##).unwrap();
//!
//! let resolver = ThemeResolver::new(theme);
//! assert_eq!(resolver.color_for(ObjectKind::Atom).base.to_string(), "#eeeeff");
//!
//! // The matching stylesheet, ready to serve
//! let css = resolver.stylesheet();
//! assert!(css.contains("--nav-width: 240px;"));
//! ```

pub mod color;
mod error;
pub mod kind;
pub mod layout;
pub mod prelude;
mod resolver;
pub mod stylesheet;
pub mod theme;

pub use color::{ColorPair, Rgb};
pub use error::{Result, ThemeError};
pub use kind::{classify, ObjectKind, UnknownKind};
pub use layout::{
    layout, layout_with, Edge, Flow, LayoutNode, LeadingGap, RenderSpec, Role, Width,
};
pub use resolver::{color_for, ThemeResolver};
pub use stylesheet::STYLESHEET_EXTENSIONS;
pub use theme::{ColorMode, KindMap, LayoutMetrics, Theme};
