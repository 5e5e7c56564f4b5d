//! Typesetting backends that turn LaTeX into markup.

mod engine;
#[cfg(feature = "katex")]
mod katex;
#[cfg(feature = "mathjax")]
mod mathjax;
#[cfg(feature = "mathml")]
mod mathml;

pub use engine::{Engine, Readiness};
#[cfg(feature = "katex")]
pub use self::katex::KatexTypesetter;
#[cfg(feature = "mathjax")]
pub use self::mathjax::MathJaxTypesetter;
#[cfg(feature = "mathml")]
pub use self::mathml::MathMlTypesetter;

use crate::error::{Error, RenderError, Result};
use crate::markup::{Markup, MarkupKind};
use serde::{Deserialize, Serialize};

/// Typesetting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// MathJax, producing standalone SVG.
    #[default]
    MathJax,
    /// KaTeX, producing styled HTML with hidden MathML.
    KaTeX,
    /// `latex2mathml`, producing a MathML fragment.
    MathML,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::MathJax => "mathjax",
            Backend::KaTeX => "katex",
            Backend::MathML => "mathml",
        }
    }

    pub fn markup_kind(self) -> MarkupKind {
        match self {
            Backend::MathJax => MarkupKind::Svg,
            Backend::KaTeX | Backend::MathML => MarkupKind::Html,
        }
    }

    /// Initialize the backend's engine.
    pub fn load(self) -> Result<Box<dyn Typesetter>> {
        match self {
            #[cfg(feature = "mathjax")]
            Backend::MathJax => Ok(Box::new(MathJaxTypesetter::new()?)),
            #[cfg(feature = "katex")]
            Backend::KaTeX => Ok(Box::new(KatexTypesetter::new()?)),
            #[cfg(feature = "mathml")]
            Backend::MathML => Ok(Box::new(MathMlTypesetter::new())),
            #[allow(unreachable_patterns)]
            other => Err(Error::ResourceLoad(format!(
                "backend `{0}` is not compiled in (enable the `{0}` feature)",
                other.name()
            ))),
        }
    }
}

/// Trait for typesetting engines.
pub trait Typesetter {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Kind of markup returned by [`Typesetter::typeset`].
    fn markup_kind(&self) -> MarkupKind;

    /// Typeset a display-mode equation.
    fn typeset(&self, latex: &str) -> std::result::Result<Markup, RenderError>;
}
