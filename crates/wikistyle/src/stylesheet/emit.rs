//! Stylesheet output.
//!
//! Produces the complete CSS a page needs: metrics as `:root` custom
//! properties, the rail/main/box layout rules, and one base and one hover
//! rule per kind. Dark overrides go in a `prefers-color-scheme` media block.
//!
//! The box rules express the same first-child rule as
//! [`layout`](crate::layout::layout): `* + *` only matches children that
//! have a previous sibling, so the first child gets no leading gap.

use std::fmt::{self, Write as _};

use crate::color::ColorPair;
use crate::kind::ObjectKind;
use crate::theme::{ColorMode, Theme};

/// Renders the stylesheet for `theme`.
pub fn emit_css(theme: &Theme) -> String {
    Stylesheet(theme).to_string()
}

struct Stylesheet<'a>(&'a Theme);

impl fmt::Display for Stylesheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let theme = self.0;
        let metrics = theme.metrics();

        if let Some(name) = theme.name() {
            writeln!(f, "/* theme: {} */", name.replace("*/", "* /"))?;
        }

        writeln!(f, ":root {{")?;
        writeln!(f, "  --nav-width: {}px;", metrics.nav_width)?;
        writeln!(f, "  --main-margin: {}px;", metrics.main_margin)?;
        writeln!(f, "  --box-gap: {}px;", metrics.box_gap)?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        f.write_str(LAYOUT_RULES)?;

        for (kind, pair) in theme.colors().iter() {
            writeln!(f)?;
            write_kind_rules(f, kind, pair, "")?;
        }

        let dark: Vec<_> = ObjectKind::ALL
            .into_iter()
            .filter_map(|kind| theme.dark_override(kind).map(|pair| (kind, pair)))
            .collect();
        if !dark.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "@media (prefers-color-scheme: {}) {{",
                ColorMode::Dark.as_str()
            )?;
            for (kind, pair) in &dark {
                write_kind_rules(f, *kind, pair, "  ")?;
            }
            writeln!(f, "}}")?;
        }

        Ok(())
    }
}

fn write_kind_rules(
    f: &mut fmt::Formatter<'_>,
    kind: ObjectKind,
    pair: &ColorPair,
    indent: &str,
) -> fmt::Result {
    writeln!(
        f,
        "{indent}a.{kind} {{ background-color: {}; }}",
        pair.base
    )?;
    writeln!(
        f,
        "{indent}a.{kind}:hover {{ background-color: {}; }}",
        pair.hover
    )
}

const LAYOUT_RULES: &str = "\
body {
  display: flex;
  flex-direction: row;
  margin: 0;
}

nav {
  flex-grow: 0;
  flex-shrink: 0;
  width: var(--nav-width);
  position: sticky;
  top: 0;
  left: 0;
}

main {
  flex-grow: 1;
  margin: var(--main-margin);
}

.vbox {
  display: flex;
  flex-direction: column;
}

.hbox {
  display: flex;
  flex-direction: row;
}

.vbox > *, .hbox > * { flex-grow: 1; }
.vbox > nav, .hbox > nav { flex-grow: 0; }
.vbox > * + * { margin-top: var(--box-gap); }
.hbox > * + * { margin-left: var(--box-gap); }
";

/// Writes `(property, value)` pairs as an inline `style` attribute value.
pub(crate) fn inline_declarations(declarations: &[(&'static str, String)]) -> String {
    let mut out = String::new();
    for (i, (property, value)) in declarations.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{}: {};", property, value);
    }
    out
}
