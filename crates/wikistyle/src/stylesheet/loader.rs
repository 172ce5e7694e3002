//! Theme file loading.

use std::path::Path;
use std::time::Instant;

use log::{error, info};

use super::css_parser::parse_css;
use super::parser::parse_yaml;
use crate::error::{Result, ThemeError};
use crate::theme::Theme;

/// Recognized theme file extensions.
pub const STYLESHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".css"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Css,
}

fn format_of(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => Some(Format::Yaml),
        "css" => Some(Format::Css),
        _ => None,
    }
}

pub(crate) fn load_file(path: &Path) -> Result<Theme> {
    let started_at = Instant::now();
    info!(
        "event=theme_load module=stylesheet status=start path={}",
        path.display()
    );

    let format = format_of(path).ok_or_else(|| ThemeError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let loaded = std::fs::read_to_string(path)
        .map_err(|source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|content| match format {
            Format::Yaml => parse_yaml(&content),
            Format::Css => parse_css(&content),
        })
        .map_err(|err| err.with_path(path));

    match loaded {
        Ok(theme) => {
            info!(
                "event=theme_load module=stylesheet status=ok path={} duration_ms={}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(match (theme.name(), path.file_stem().and_then(|s| s.to_str())) {
                (None, Some(stem)) => theme.with_name(stem),
                _ => theme,
            })
        }
        Err(err) => {
            error!(
                "event=theme_load module=stylesheet status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_of() {
        assert_eq!(format_of(Path::new("a/b.yaml")), Some(Format::Yaml));
        assert_eq!(format_of(Path::new("b.YML")), Some(Format::Yaml));
        assert_eq!(format_of(Path::new("style.css")), Some(Format::Css));
        assert_eq!(format_of(Path::new("theme.json")), None);
        assert_eq!(format_of(Path::new("theme")), None);
    }

    #[test]
    fn test_extensions_match_formats() {
        for ext in STYLESHEET_EXTENSIONS {
            let name = format!("theme{}", ext);
            assert!(format_of(Path::new(&name)).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_unsupported_format_is_checked_before_reading() {
        let err = load_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_file(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, ThemeError::Load { .. }));
    }
}
