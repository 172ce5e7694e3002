//! Color values for kind styling.
//!
//! Supports the color notations a hand-written stylesheet is likely to use:
//!
//! - Hex: `"#c6e2ff"` or `"#fff"` (3 or 6 digits, any case)
//! - Functional: `rgb(198, 226, 255)`
//! - Named: the basic CSS color keywords (`white`, `navy`, `lightblue`, ...)
//!
//! Colors always print as lowercase 6-digit hex, which is also their serde
//! representation.
//!
//! # Example
//!
//! ```rust
//! use wikistyle::Rgb;
//!
//! let hex = Rgb::parse("#f80").unwrap();
//! assert_eq!(hex, Rgb::new(255, 136, 0));
//!
//! let named = Rgb::parse("navy").unwrap();
//! assert_eq!(named.to_string(), "#000080");
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Parses a color from a string.
    ///
    /// Supports hex codes, `rgb(r, g, b)` and named colors.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb(") && lower.ends_with(')') {
            return Self::parse_rgb_function(&lower[4..lower.len() - 1]);
        }

        Self::parse_named(&lower).ok_or_else(|| format!("Unknown color name: {}", s))
    }

    /// Parses a hex color code (without the # prefix).
    pub(crate) fn parse_hex(hex: &str) -> Result<Self, String> {
        let digit = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| format!("Invalid hex: {}", hex))
        };
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Rgb(digit(0..1)? * 17, digit(1..2)? * 17, digit(2..3)? * 17)),
            6 => Ok(Rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses the inside of `rgb(...)`.
    fn parse_rgb_function(inner: &str) -> Result<Self, String> {
        let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
        if parts.len() != 3 {
            return Err(format!(
                "rgb() requires exactly 3 components, got {}",
                parts.len()
            ));
        }

        let mut components = [0u8; 3];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .parse::<u8>()
                .map_err(|_| format!("Invalid rgb component '{}': expected 0-255", part))?;
        }
        Ok(Rgb(components[0], components[1], components[2]))
    }

    fn parse_named(name: &str) -> Option<Self> {
        let rgb = match name {
            "black" => Rgb(0, 0, 0),
            "white" => Rgb(255, 255, 255),
            "gray" | "grey" => Rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Rgb(211, 211, 211),
            "silver" => Rgb(192, 192, 192),
            "red" => Rgb(255, 0, 0),
            "maroon" => Rgb(128, 0, 0),
            "orange" => Rgb(255, 165, 0),
            "yellow" => Rgb(255, 255, 0),
            "olive" => Rgb(128, 128, 0),
            "lime" => Rgb(0, 255, 0),
            "green" => Rgb(0, 128, 0),
            "lightgreen" => Rgb(144, 238, 144),
            "aqua" | "cyan" => Rgb(0, 255, 255),
            "teal" => Rgb(0, 128, 128),
            "blue" => Rgb(0, 0, 255),
            "lightblue" => Rgb(173, 216, 230),
            "navy" => Rgb(0, 0, 128),
            "fuchsia" | "magenta" => Rgb(255, 0, 255),
            "purple" => Rgb(128, 0, 128),
            "pink" => Rgb(255, 192, 203),
            "wheat" => Rgb(245, 222, 179),
            "khaki" => Rgb(240, 230, 140),
            _ => return None,
        };
        Some(rgb)
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Base and hover display colors for one object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub base: Rgb,
    pub hover: Rgb,
}

impl ColorPair {
    pub const fn new(base: Rgb, hover: Rgb) -> Self {
        Self { base, hover }
    }

    /// True if hovering visibly changes the color.
    pub fn is_distinct(&self) -> bool {
        self.base != self.hover
    }
}
