//! KaTeX backend producing HTML with embedded MathML.

use super::Typesetter;
use crate::error::{Error, RenderError, Result};
use crate::markup::{Markup, MarkupKind};
use katex::{Opts, OptsBuilder};

/// Typesetter backed by the bundled KaTeX library.
pub struct KatexTypesetter {
    opts: Opts,
}

impl KatexTypesetter {
    /// Display mode, with parse errors rendered inline instead of raised.
    pub fn new() -> Result<Self> {
        let mut builder = OptsBuilder::default();
        builder.display_mode(true);
        builder.throw_on_error(false);

        let opts = builder
            .build()
            .map_err(|err| Error::ResourceLoad(format!("failed to build KaTeX options: {err}")))?;
        Ok(Self { opts })
    }
}

impl Typesetter for KatexTypesetter {
    fn name(&self) -> &'static str {
        "katex"
    }

    fn markup_kind(&self) -> MarkupKind {
        MarkupKind::Html
    }

    fn typeset(&self, latex: &str) -> std::result::Result<Markup, RenderError> {
        katex::render_with_opts(latex, &self.opts)
            .map(Markup::Html)
            .map_err(|err| RenderError::Invalid(format!("KaTeX rendering failed: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fraction() {
        let katex = KatexTypesetter::new().unwrap();
        let markup = katex.typeset(r"\frac{a}{b}").unwrap();
        assert!(markup.as_str().contains("katex-display"));
    }

    #[test]
    fn test_invalid_input_does_not_throw() {
        let katex = KatexTypesetter::new().unwrap();
        assert!(katex.typeset(r"\frac{a").is_ok());
    }
}
