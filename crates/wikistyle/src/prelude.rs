//! Convenient imports for rendering code.
//!
//! ```rust
//! use wikistyle::prelude::*;
//!
//! let spec = layout(&LayoutNode::page(vec![], vec![LayoutNode::link("Joe", "atom")]));
//! assert_eq!(spec.role, Role::HBox);
//! ```

pub use crate::{
    classify, color_for, layout, ColorMode, ColorPair, LayoutNode, ObjectKind, RenderSpec, Rgb,
    Role, Theme, ThemeError, ThemeResolver,
};
