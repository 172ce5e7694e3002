//! The theme resolver: one theme and one color mode, shared read-only.
//!
//! A [`ThemeResolver`] holds no mutable state, so one instance can serve any
//! number of rendering threads without locking. The free functions
//! [`color_for`] and [`layout`](crate::layout()) use a process-wide resolver
//! over the built-in theme.

use once_cell::sync::Lazy;

use crate::color::ColorPair;
use crate::kind::{classify, ObjectKind};
use crate::layout::{layout_with, LayoutNode, RenderSpec};
use crate::theme::{ColorMode, Theme};

static DEFAULT_RESOLVER: Lazy<ThemeResolver> = Lazy::new(ThemeResolver::default);

pub(crate) fn default_resolver() -> &'static ThemeResolver {
    &DEFAULT_RESOLVER
}

/// Maps object kinds to colors and layout trees to render specs.
///
/// # Example
///
/// ```rust
/// use wikistyle::{ColorMode, LayoutNode, ObjectKind, Theme, ThemeResolver};
///
/// let resolver = ThemeResolver::new(Theme::new()).with_mode(ColorMode::Dark);
///
/// let pair = resolver.color_for(ObjectKind::Atom);
/// assert_ne!(pair.base, pair.hover);
///
/// assert!(resolver.style_for_tag("page").is_none());
///
/// let spec = resolver.layout(&LayoutNode::page(vec![], vec![]));
/// assert_eq!(spec.children[0].flex_grow, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResolver {
    theme: Theme,
    mode: ColorMode,
}

impl ThemeResolver {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            mode: ColorMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Color pair of `kind` in this resolver's mode.
    pub fn color_for(&self, kind: ObjectKind) -> ColorPair {
        self.theme.color_for_mode(kind, self.mode)
    }

    /// Parses a kind tag. See [`classify`](crate::classify).
    pub fn classify(&self, tag: &str) -> Option<ObjectKind> {
        classify(tag)
    }

    /// Colors for a raw tag, or `None` to render it unstyled.
    pub fn style_for_tag(&self, tag: &str) -> Option<ColorPair> {
        self.classify(tag).map(|kind| self.color_for(kind))
    }

    pub fn layout(&self, node: &LayoutNode) -> RenderSpec {
        layout_with(node, &self.theme, self.mode)
    }

    /// Complete stylesheet for the theme, covering both color modes.
    pub fn stylesheet(&self) -> String {
        self.theme.to_css()
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Color pair of `kind` in the built-in theme (light mode).
pub fn color_for(kind: ObjectKind) -> ColorPair {
    default_resolver().color_for(kind)
}
