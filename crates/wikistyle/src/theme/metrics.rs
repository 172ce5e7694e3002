//! Pixel constants used by the layout rules.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAV_WIDTH: u32 = 200;
pub const DEFAULT_MAIN_MARGIN: u32 = 4;
pub const DEFAULT_BOX_GAP: u32 = 4;

/// Sizes applied when laying out a view, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Fixed width of the navigation rail.
    pub nav_width: u32,
    /// Uniform margin around the main area.
    pub main_margin: u32,
    /// Gap between consecutive children of a box.
    pub box_gap: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            nav_width: DEFAULT_NAV_WIDTH,
            main_margin: DEFAULT_MAIN_MARGIN,
            box_gap: DEFAULT_BOX_GAP,
        }
    }
}
