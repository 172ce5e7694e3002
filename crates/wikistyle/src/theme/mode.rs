use serde::{Deserialize, Serialize};

/// Light or dark presentation.
///
/// Browsers report the preference through `prefers-color-scheme`, so the
/// generated stylesheet switches on its own. Server-side callers that inline
/// colors pick a mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Value used in `@media (prefers-color-scheme: ...)`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}
