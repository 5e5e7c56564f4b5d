//! MathJax backend producing SVG.

use super::Typesetter;
use crate::error::{Error, RenderError, Result};
use crate::markup::{parse_document, Markup, MarkupKind};
use mathjax::MathJax;

/// Typesetter backed by a MathJax instance.
///
/// Creating one starts the MathJax runtime, so it is done once per session
/// through [`super::Engine::load`].
pub struct MathJaxTypesetter {
    renderer: MathJax,
}

impl MathJaxTypesetter {
    pub fn new() -> Result<Self> {
        let renderer = MathJax::new().map_err(|err| Error::ResourceLoad(format!("{err:?}")))?;
        Ok(Self { renderer })
    }
}

impl Typesetter for MathJaxTypesetter {
    fn name(&self) -> &'static str {
        "mathjax"
    }

    fn markup_kind(&self) -> MarkupKind {
        MarkupKind::Svg
    }

    fn typeset(&self, latex: &str) -> std::result::Result<Markup, RenderError> {
        let render = self
            .renderer
            .render(&display_math(latex))
            .map_err(|err| RenderError::Invalid(err.to_string()))?;
        first_svg(&render.into_raw())
    }
}

/// Force display style whatever mode the engine defaults to.
fn display_math(latex: &str) -> String {
    format!("\\displaystyle{{{latex}}}")
}

/// Pull the first `<svg>` element out of the engine output.
fn first_svg(raw: &str) -> std::result::Result<Markup, RenderError> {
    let root = parse_document(raw)?;
    root.find("svg")
        .map(|svg| Markup::Svg(svg.to_xml()))
        .ok_or_else(|| RenderError::Invalid("engine produced no SVG".into()))
}
