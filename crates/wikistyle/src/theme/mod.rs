//! Themes: kind colors, dark-mode overrides and layout metrics.
//!
//! A [`Theme`] is static configuration. Build it once (programmatically or
//! from a YAML/CSS file), then share it read-only with every rendering
//! context.
//!
//! ## Adaptive Colors
//!
//! Each kind has a base pair used in light mode. A theme may also carry a
//! dark-mode pair per kind; kinds without one reuse the base pair:
//!
//! ```yaml
//! kinds:
//!   atom: { base: "#c6e2ff", hover: "#9cc9f5" }
//! dark:
//!   atom: { base: "#1f3b57", hover: "#2d5680" }
//! ```
//!
//! ## See Also
//!
//! - [`crate::stylesheet`]: file formats and CSS output
//! - [`crate::layout`]: where the metrics are used

mod kind_map;
mod metrics;
mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use kind_map::KindMap;
pub use metrics::{LayoutMetrics, DEFAULT_BOX_GAP, DEFAULT_MAIN_MARGIN, DEFAULT_NAV_WIDTH};
pub use mode::ColorMode;
pub use theme::Theme;
