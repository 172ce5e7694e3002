//! Theme definitions shared by the YAML and CSS loaders.
//!
//! Both loaders produce a [`ThemeDefinition`]: a sparse description where
//! every value is optional. Building it starts from the built-in theme and
//! overlays whatever the file specified, then validates the result.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::{ColorPair, Rgb};
use crate::error::{Result, ThemeError};
use crate::kind::ObjectKind;
use crate::theme::{LayoutMetrics, Theme};

/// Sparse theme as read from a file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ThemeDefinition {
    pub name: Option<String>,
    #[serde(default)]
    pub kinds: BTreeMap<ObjectKind, PairDefinition>,
    #[serde(default)]
    pub dark: BTreeMap<ObjectKind, PairDefinition>,
    #[serde(default)]
    pub layout: MetricsDefinition,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PairDefinition {
    pub base: Option<Rgb>,
    pub hover: Option<Rgb>,
}

impl PairDefinition {
    fn resolve(&self, fallback: ColorPair) -> ColorPair {
        ColorPair::new(
            self.base.unwrap_or(fallback.base),
            self.hover.unwrap_or(fallback.hover),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MetricsDefinition {
    pub nav_width: Option<u32>,
    pub main_margin: Option<u32>,
    pub box_gap: Option<u32>,
}

impl MetricsDefinition {
    fn resolve(&self, fallback: LayoutMetrics) -> LayoutMetrics {
        LayoutMetrics {
            nav_width: self.nav_width.unwrap_or(fallback.nav_width),
            main_margin: self.main_margin.unwrap_or(fallback.main_margin),
            box_gap: self.box_gap.unwrap_or(fallback.box_gap),
        }
    }
}

impl ThemeDefinition {
    /// Overlays this definition on the built-in theme.
    ///
    /// A kind whose light colors the file sets drops the built-in dark pair,
    /// so in dark mode it shows the file's own colors. A dark entry fills
    /// its missing half from the built-in dark pair it replaces, or from the
    /// resolved light pair when that was dropped.
    pub fn build(self) -> Result<Theme> {
        let defaults = Theme::new();
        let mut theme = defaults.clone();

        if let Some(name) = self.name {
            theme = theme.with_name(name);
        }

        for (kind, pair) in &self.kinds {
            theme = theme
                .with_colors(*kind, pair.resolve(defaults.color_for(*kind)))
                .with_dark_colors(*kind, None);
        }

        for (kind, pair) in &self.dark {
            let fallback = theme
                .dark_override(*kind)
                .unwrap_or_else(|| theme.color_for(*kind));
            theme = theme.with_dark_colors(*kind, Some(pair.resolve(fallback)));
        }

        theme = theme.with_metrics(self.layout.resolve(*defaults.metrics()));
        theme.validate()?;
        Ok(theme)
    }
}

/// Parses a YAML theme.
///
/// # Example
///
/// ```yaml
/// name: parchment
/// kinds:
///   atom: { base: "#c6e2ff", hover: "#9cc9f5" }
///   abstract: { hover: wheat }
/// dark:
///   atom: { base: "#1f3b57" }
/// layout:
///   nav_width: 220
/// ```
pub fn parse_yaml(yaml: &str) -> Result<Theme> {
    if yaml.trim().is_empty() {
        return ThemeDefinition::default().build();
    }

    let definition: ThemeDefinition =
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
    definition.build()
}
