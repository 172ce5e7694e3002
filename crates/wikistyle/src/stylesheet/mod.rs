//! Theme files in and stylesheets out.
//!
//! Themes can be written in two formats:
//!
//! - **YAML**: a `kinds` / `dark` / `layout` mapping, see [`Theme::from_yaml`](crate::Theme::from_yaml)
//! - **CSS**: the same rules [`Theme::to_css`](crate::Theme::to_css) emits, see [`css_parser`]
//!
//! Both formats are sparse. Anything a file leaves out keeps the built-in
//! value, so a theme that only recolors atoms is a two-line file.
//!
//! # Module Structure
//!
//! - [`parser`]: shared theme definition and the YAML loader
//! - [`css_parser`]: the CSS loader
//! - [`emit`]: stylesheet output
//! - `loader`: file loading by extension

pub mod css_parser;
pub mod emit;
mod loader;
pub mod parser;

pub use css_parser::parse_css;
pub use emit::emit_css;
pub(crate) use emit::inline_declarations;
pub(crate) use loader::load_file;
pub use loader::STYLESHEET_EXTENSIONS;
pub use parser::parse_yaml;
