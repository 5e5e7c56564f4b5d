//! MathML backend.

use super::Typesetter;
use crate::error::RenderError;
use crate::markup::{Markup, MarkupKind};
use latex2mathml::{latex_to_mathml, DisplayStyle};

/// Typesetter that converts LaTeX to MathML.
#[derive(Debug, Default)]
pub struct MathMlTypesetter;

impl MathMlTypesetter {
    pub fn new() -> Self {
        Self
    }
}

impl Typesetter for MathMlTypesetter {
    fn name(&self) -> &'static str {
        "mathml"
    }

    fn markup_kind(&self) -> MarkupKind {
        MarkupKind::Html
    }

    fn typeset(&self, latex: &str) -> Result<Markup, RenderError> {
        latex_to_mathml(latex, DisplayStyle::Block)
            .map(Markup::Html)
            .map_err(|err| RenderError::Invalid(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mathml_block() {
        let markup = MathMlTypesetter::new().typeset("x^2").unwrap();
        assert!(markup.as_str().contains("<math"));
    }
}
