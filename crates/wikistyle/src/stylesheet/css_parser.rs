//! CSS theme parsing.
//!
//! Reads back the stylesheet this crate emits, or a hand-written one in the
//! same shape. Only the rules that carry theme data are interpreted:
//!
//! - **Kind rules**: `.atom` or `a.atom` sets the base color of a kind and
//!   `a.atom:hover` sets its hover color, via `background-color` or
//!   `background`.
//! - **Dark overrides**: kind rules inside
//!   `@media (prefers-color-scheme: dark) { ... }`.
//! - **Metrics**: custom properties on `:root`, in pixels:
//!   `--nav-width`, `--main-margin`, `--box-gap`.
//!
//! Everything else (layout rules, other selectors, unknown properties, other
//! at-rules) is skipped, so a full production stylesheet loads fine. A bad
//! value on a rule that *is* interpreted is an error.
//!
//! The parser is built on `cssparser`, so comments, escapes and nesting are
//! handled the way a browser would.
//!
//! # Example
//!
//! ```css
//! :root { --nav-width: 220px; }
//!
//! a.atom       { background-color: #c6e2ff; }
//! a.atom:hover { background-color: #9cc9f5; }
//!
//! @media (prefers-color-scheme: dark) {
//!     a.atom { background-color: #1f3b57; }
//! }
//! ```

use std::fmt;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};
use log::debug;

use super::parser::ThemeDefinition;
use crate::color::Rgb;
use crate::error::{Result, ThemeError};
use crate::kind::ObjectKind;
use crate::theme::{ColorMode, Theme};

/// Parses a CSS theme.
pub fn parse_css(css: &str) -> Result<Theme> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut sheet = ThemeSheetParser {
        definition: ThemeDefinition::default(),
        mode: ColorMode::Light,
        errors: Vec::new(),
    };

    let rules = cssparser::StyleSheetParser::new(&mut parser, &mut sheet);
    for result in rules {
        if let Err((err, rule)) = result {
            log_skipped_rule(&err, rule);
        }
    }

    if let Some(err) = sheet.errors.into_iter().next() {
        return Err(err);
    }
    sheet.definition.build()
}

fn log_skipped_rule<E>(err: &ParseError<'_, E>, rule: &str) {
    debug!(
        "event=css_rule module=stylesheet status=skipped line={} rule={:?}",
        err.location.line + 1,
        rule.trim()
    );
}

/// A selector this parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Kind { kind: ObjectKind, hover: bool },
    Root,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Kind { kind, hover: false } => write!(f, "a.{}", kind),
            Target::Kind { kind, hover: true } => write!(f, "a.{}:hover", kind),
            Target::Root => f.write_str(":root"),
        }
    }
}

/// Pieces of one compound selector, collected token by token.
#[derive(Debug, Default)]
struct Selector {
    element: Option<String>,
    class: Option<String>,
    pseudo: Option<String>,
    /// Set by whitespace after a compound; anything more is a combinator.
    closed: bool,
    unsupported: bool,
}

impl Selector {
    fn is_empty(&self) -> bool {
        self.element.is_none() && self.class.is_none() && self.pseudo.is_none()
    }

    fn close(&mut self) {
        if !self.is_empty() {
            self.closed = true;
        }
    }

    fn element(&mut self, name: &str) {
        if self.closed || !self.is_empty() {
            self.unsupported = true;
        } else {
            self.element = Some(name.to_ascii_lowercase());
        }
    }

    fn class(&mut self, name: &str) {
        if self.closed || self.class.is_some() || self.pseudo.is_some() {
            self.unsupported = true;
        } else {
            self.class = Some(name.to_string());
        }
    }

    fn pseudo(&mut self, name: &str) {
        if self.closed || self.pseudo.is_some() {
            self.unsupported = true;
        } else {
            self.pseudo = Some(name.to_ascii_lowercase());
        }
    }

    fn finish(self) -> Option<Target> {
        if self.unsupported {
            return None;
        }
        match (
            self.element.as_deref(),
            self.class.as_deref(),
            self.pseudo.as_deref(),
        ) {
            (None, None, Some("root")) => Some(Target::Root),
            (None | Some("a"), Some(class), pseudo) => {
                let kind = class.parse::<ObjectKind>().ok()?;
                match pseudo {
                    None => Some(Target::Kind { kind, hover: false }),
                    Some("hover") => Some(Target::Kind { kind, hover: true }),
                    Some(_) => None,
                }
            }
            _ => None,
        }
    }
}

struct ThemeSheetParser {
    definition: ThemeDefinition,
    mode: ColorMode,
    errors: Vec<ThemeError>,
}

impl ThemeSheetParser {
    fn apply(&mut self, target: Target, declaration: Declaration) {
        match (target, declaration) {
            (Target::Kind { kind, hover }, Declaration::Background(color)) => {
                let table = match self.mode {
                    ColorMode::Light => &mut self.definition.kinds,
                    ColorMode::Dark => &mut self.definition.dark,
                };
                let pair = table.entry(kind).or_default();
                if hover {
                    pair.hover = Some(color);
                } else {
                    pair.base = Some(color);
                }
            }
            (Target::Root, Declaration::NavWidth(px)) => self.definition.layout.nav_width = Some(px),
            (Target::Root, Declaration::MainMargin(px)) => {
                self.definition.layout.main_margin = Some(px)
            }
            (Target::Root, Declaration::BoxGap(px)) => self.definition.layout.box_gap = Some(px),
            (target, declaration) => debug!(
                "event=css_declaration module=stylesheet status=ignored selector={} declaration={:?}",
                target, declaration
            ),
        }
    }

    fn record(&mut self, targets: &[Target], error: DeclarationError) {
        let selector = targets
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let err = match error {
            DeclarationError::Unsupported => return,
            DeclarationError::InvalidColor {
                property,
                value,
                reason,
            } => ThemeError::InvalidColor {
                context: format!("{} in {}", property, selector),
                value,
                reason,
            },
            DeclarationError::InvalidLength { property, value } => ThemeError::InvalidLength {
                context: format!("{} in {}", property, selector),
                value,
            },
        };
        self.errors.push(err);
    }
}

impl<'i> QualifiedRuleParser<'i> for ThemeSheetParser {
    type Prelude = Vec<Target>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut targets = Vec::new();
        let mut selector = Selector::default();

        while let Ok(token) = input.next_including_whitespace() {
            match token.clone() {
                Token::WhiteSpace(_) => selector.close(),
                Token::Ident(name) => selector.element(name.as_ref()),
                Token::Delim('.') => {
                    let name = input.expect_ident_cloned()?;
                    selector.class(name.as_ref());
                }
                Token::Colon => {
                    let name = input.expect_ident_cloned()?;
                    selector.pseudo(name.as_ref());
                }
                Token::Comma => targets.extend(std::mem::take(&mut selector).finish()),
                _ => selector.unsupported = true,
            }
        }
        targets.extend(selector.finish());

        Ok(targets)
    }

    fn parse_block<'t>(
        &mut self,
        targets: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        if targets.is_empty() {
            while input.next().is_ok() {}
            return Ok(());
        }

        let mut decl_parser = ThemeDeclarationParser;
        let body = RuleBodyParser::new(input, &mut decl_parser);

        let mut declarations = Vec::new();
        let mut failures = Vec::new();
        for result in body {
            match result {
                Ok(declaration) => declarations.push(declaration),
                Err((err, source)) => match err.kind {
                    ParseErrorKind::Custom(DeclarationError::Unsupported) | ParseErrorKind::Basic(_) => {
                        debug!(
                            "event=css_declaration module=stylesheet status=skipped declaration={:?}",
                            source.trim()
                        );
                    }
                    ParseErrorKind::Custom(error) => failures.push(error),
                },
            }
        }

        for error in failures {
            self.record(&targets, error);
        }
        for target in &targets {
            for declaration in &declarations {
                self.apply(*target, *declaration);
            }
        }
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for ThemeSheetParser {
    type Prelude = ColorMode;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if !name.eq_ignore_ascii_case("media") {
            return Err(input.new_custom_error(()));
        }

        let mut found_mode = None;
        loop {
            match input.next() {
                Ok(Token::ParenthesisBlock) => {
                    let nested = input.parse_nested_block(|input| {
                        input.expect_ident_matching("prefers-color-scheme")?;
                        input.expect_colon()?;
                        let value = input.expect_ident_cloned()?;
                        match value.as_ref() {
                            "dark" => Ok(ColorMode::Dark),
                            "light" => Ok(ColorMode::Light),
                            _ => Err(input.new_custom_error::<(), ()>(())),
                        }
                    });
                    if let Ok(mode) = nested {
                        found_mode = Some(mode);
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }

        found_mode.ok_or_else(|| input.new_custom_error(()))
    }

    fn parse_block<'t>(
        &mut self,
        mode: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let outer = self.mode;
        self.mode = mode;

        let rules = cssparser::StyleSheetParser::new(input, self);
        for result in rules {
            if let Err((err, rule)) = result {
                log_skipped_rule(&err, rule);
            }
        }

        self.mode = outer;
        Ok(())
    }
}

/// One interpreted declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Declaration {
    Background(Rgb),
    NavWidth(u32),
    MainMargin(u32),
    BoxGap(u32),
}

#[derive(Debug, Clone, PartialEq)]
enum DeclarationError {
    /// Property this parser does not interpret.
    Unsupported,
    InvalidColor {
        property: String,
        value: String,
        reason: String,
    },
    InvalidLength {
        property: String,
        value: String,
    },
}

struct ThemeDeclarationParser;

impl<'i> DeclarationParser<'i> for ThemeDeclarationParser {
    type Declaration = Declaration;
    type Error = DeclarationError;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        match name.as_ref() {
            "background-color" | "background" => {
                parse_color(name.as_ref(), input).map(Declaration::Background)
            }
            "--nav-width" => parse_px(name.as_ref(), input).map(Declaration::NavWidth),
            "--main-margin" => parse_px(name.as_ref(), input).map(Declaration::MainMargin),
            "--box-gap" => parse_px(name.as_ref(), input).map(Declaration::BoxGap),
            _ => Err(input.new_custom_error(DeclarationError::Unsupported)),
        }
    }
}

impl<'i> AtRuleParser<'i> for ThemeDeclarationParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = DeclarationError;
}

impl<'i> QualifiedRuleParser<'i> for ThemeDeclarationParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = DeclarationError;
}

impl<'i> RuleBodyItemParser<'i, Declaration, DeclarationError> for ThemeDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

fn parse_color<'i, 't>(
    property: &str,
    input: &mut Parser<'i, 't>,
) -> std::result::Result<Rgb, ParseError<'i, DeclarationError>> {
    let start = input.position();
    let token = input.next()?.clone();

    let parsed = match token {
        Token::Ident(name) => Rgb::parse(name.as_ref()),
        Token::Hash(hex) | Token::IDHash(hex) => Rgb::parse_hex(hex.as_ref()),
        Token::Function(name) if name.eq_ignore_ascii_case("rgb") => input
            .parse_nested_block(parse_rgb_arguments)
            .map_err(|_| "rgb() requires three integers between 0 and 255".to_string()),
        _ => Err("expected a color".to_string()),
    };

    parsed.map_err(|reason| {
        input.new_custom_error(DeclarationError::InvalidColor {
            property: property.to_string(),
            value: input.slice_from(start).trim().to_string(),
            reason,
        })
    })
}

fn parse_rgb_arguments<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> std::result::Result<Rgb, ParseError<'i, DeclarationError>> {
    let mut components = [0u8; 3];
    for (i, component) in components.iter_mut().enumerate() {
        if i > 0 {
            input.expect_comma()?;
        }
        let value = input.expect_integer()?;
        *component = match u8::try_from(value) {
            Ok(c) => c,
            Err(_) => return Err(input.new_custom_error(DeclarationError::Unsupported)),
        };
    }
    Ok(Rgb::new(components[0], components[1], components[2]))
}

fn parse_px<'i, 't>(
    property: &str,
    input: &mut Parser<'i, 't>,
) -> std::result::Result<u32, ParseError<'i, DeclarationError>> {
    let start = input.position();
    let token = input.next()?.clone();
    let text = input.slice_from(start).trim();

    // The token value is an f32; the digits in the source are exact.
    let px = match token {
        Token::Dimension {
            int_value: Some(_),
            ref unit,
            ..
        } if unit.eq_ignore_ascii_case("px") => text
            .get(..text.len().saturating_sub(unit.len()))
            .and_then(|digits| digits.parse::<u32>().ok()),
        Token::Number {
            int_value: Some(0), ..
        } => Some(0),
        _ => None,
    };

    px.ok_or_else(|| {
        input.new_custom_error(DeclarationError::InvalidLength {
            property: property.to_string(),
            value: text.to_string(),
        })
    })
}
