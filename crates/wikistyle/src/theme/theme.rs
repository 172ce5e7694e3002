//! Theme struct holding the kind color table and layout metrics.
//!
//! A theme always has a color pair for every [`ObjectKind`]; there is no way
//! to build one with a missing kind. Dark-mode pairs are optional overrides
//! that fall back to the base table.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use wikistyle::{ColorPair, ObjectKind, Rgb, Theme};
//!
//! let theme = Theme::named("sepia").with_colors(
//!     ObjectKind::Atom,
//!     ColorPair::new(Rgb::new(0xf4, 0xe8, 0xd0), Rgb::new(0xe6, 0xd0, 0xa8)),
//! );
//! assert_eq!(theme.color_for(ObjectKind::Atom).base.to_string(), "#f4e8d0");
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use wikistyle::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! kinds:
//!   relation: { base: "#d0f0d0", hover: "#a0d8a0" }
//! layout:
//!   box_gap: 8
//! "##).unwrap();
//! assert_eq!(theme.metrics().box_gap, 8);
//! ```
//!
//! ## From CSS
//!
//! ```rust
//! use wikistyle::{ObjectKind, Theme};
//!
//! let theme = Theme::from_css("a.atom { background-color: #eee; } a.atom:hover { background: #ccc; }").unwrap();
//! assert_eq!(theme.color_for(ObjectKind::Atom).hover.to_string(), "#cccccc");
//! ```

use std::path::Path;

use crate::color::{ColorPair, Rgb};
use crate::error::{Result, ThemeError};
use crate::kind::ObjectKind;
use crate::stylesheet;

use super::kind_map::KindMap;
use super::metrics::LayoutMetrics;
use super::mode::ColorMode;

const DEFAULT_COLORS: KindMap<ColorPair> = KindMap::new(
    ColorPair::new(Rgb::new(0xc6, 0xe2, 0xff), Rgb::new(0x9c, 0xc9, 0xf5)),
    ColorPair::new(Rgb::new(0xd4, 0xf0, 0xc4), Rgb::new(0xaf, 0xdd, 0x96)),
    ColorPair::new(Rgb::new(0xf5, 0xdf, 0xc0), Rgb::new(0xe8, 0xc2, 0x8d)),
);

const DEFAULT_DARK_COLORS: KindMap<Option<ColorPair>> = KindMap::new(
    Some(ColorPair::new(Rgb::new(0x1f, 0x3b, 0x57), Rgb::new(0x2d, 0x56, 0x80))),
    Some(ColorPair::new(Rgb::new(0x2a, 0x4a, 0x22), Rgb::new(0x3b, 0x6a, 0x30))),
    Some(ColorPair::new(Rgb::new(0x54, 0x40, 0x1f), Rgb::new(0x76, 0x59, 0x2b))),
);

/// Kind colors plus the metrics used to lay out a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Base color pair per kind (light mode).
    colors: KindMap<ColorPair>,
    /// Dark-mode overrides.
    dark: KindMap<Option<ColorPair>>,
    metrics: LayoutMetrics,
}

impl Theme {
    /// Creates an unnamed theme with the built-in palette.
    pub fn new() -> Self {
        Self {
            name: None,
            colors: DEFAULT_COLORS,
            dark: DEFAULT_DARK_COLORS,
            metrics: LayoutMetrics::default(),
        }
    }

    /// Creates a theme with the built-in palette and the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the base (light) color pair of `kind`.
    pub fn with_colors(mut self, kind: ObjectKind, pair: ColorPair) -> Self {
        *self.colors.get_mut(kind) = pair;
        self
    }

    /// Sets or clears the dark-mode override of `kind`.
    pub fn with_dark_colors(mut self, kind: ObjectKind, pair: Option<ColorPair>) -> Self {
        *self.dark.get_mut(kind) = pair;
        self
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Base color pair of `kind`.
    pub fn color_for(&self, kind: ObjectKind) -> ColorPair {
        *self.colors.get(kind)
    }

    /// Color pair of `kind` in `mode`, falling back to the base pair when
    /// no dark override exists.
    pub fn color_for_mode(&self, kind: ObjectKind, mode: ColorMode) -> ColorPair {
        match mode {
            ColorMode::Light => self.color_for(kind),
            ColorMode::Dark => self
                .dark_override(kind)
                .unwrap_or_else(|| self.color_for(kind)),
        }
    }

    /// Dark-mode override of `kind`, if the theme defines one.
    pub fn dark_override(&self, kind: ObjectKind) -> Option<ColorPair> {
        *self.dark.get(kind)
    }

    /// Base color table.
    pub fn colors(&self) -> &KindMap<ColorPair> {
        &self.colors
    }

    /// Checks that every pair, base and dark, changes color on hover.
    pub fn validate(&self) -> Result<()> {
        for (kind, pair) in self.colors.iter() {
            check_distinct(kind, pair)?;
        }
        for (kind, pair) in self.dark.iter() {
            if let Some(pair) = pair {
                check_distinct(kind, pair)?;
            }
        }
        Ok(())
    }

    /// Parses a theme from YAML. Missing entries keep the built-in values.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        stylesheet::parse_yaml(yaml)
    }

    /// Parses a theme from the supported CSS subset.
    pub fn from_css(css: &str) -> Result<Self> {
        stylesheet::parse_css(css)
    }

    /// Loads a theme from a `.yaml`, `.yml` or `.css` file.
    ///
    /// When the file does not name the theme, the file stem is used.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        stylesheet::load_file(path.as_ref())
    }

    /// Renders the complete stylesheet for this theme.
    pub fn to_css(&self) -> String {
        stylesheet::emit_css(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

fn check_distinct(kind: ObjectKind, pair: &ColorPair) -> Result<()> {
    if pair.is_distinct() {
        Ok(())
    } else {
        Err(ThemeError::HoverNotDistinct {
            kind,
            color: pair.base,
        })
    }
}
