//! Markup produced by typesetting engines, and the tools to edit it.

mod parser;
mod style;
mod tree;

pub use parser::{edit_root_attributes, parse_document, parse_svg};
pub use style::Style;
pub use tree::{Attribute, Element, Node};

/// What kind of markup a typesetting backend emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    /// Standalone SVG. Child paths do not inherit CSS `color` as fill.
    Svg,
    /// HTML or MathML fragment styled through CSS inheritance.
    Html,
}

/// A typeset equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Svg(String),
    Html(String),
}

impl Markup {
    pub fn kind(&self) -> MarkupKind {
        match self {
            Markup::Svg(_) => MarkupKind::Svg,
            Markup::Html(_) => MarkupKind::Html,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Markup::Svg(s) | Markup::Html(s) => s,
        }
    }
}
