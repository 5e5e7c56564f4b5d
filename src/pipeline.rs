//! The render pipeline: typeset, then recolor.

use crate::color::ColorPair;
use crate::error::RenderError;
use crate::markup::Markup;
use crate::postprocess::{apply_colors, ColorStrategy};
use crate::state::{EquationInput, Resolution};
use crate::typeset::Engine;

/// The styled equation currently shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    markup: Option<Markup>,
    colors: ColorPair,
    resolution: Resolution,
}

impl Preview {
    /// A preview with nothing to show.
    pub fn empty(colors: ColorPair, resolution: Resolution) -> Self {
        Self {
            markup: None,
            colors,
            resolution,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_none()
    }

    pub fn markup(&self) -> Option<&Markup> {
        self.markup.as_ref()
    }

    pub fn colors(&self) -> &ColorPair {
        &self.colors
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

/// Render an equation for display.
///
/// Blank input, or an engine that is still loading, gives an empty preview.
/// Recomputed on every call; nothing is cached.
pub fn render(
    engine: &Engine,
    input: &EquationInput,
    colors: &ColorPair,
    resolution: Resolution,
    strategy: ColorStrategy,
) -> Result<Preview, RenderError> {
    let typesetter = match engine.typesetter() {
        Ok(t) if !input.is_blank() => t,
        _ => return Ok(Preview::empty(colors.clone(), resolution)),
    };

    tracing::debug!(backend = typesetter.name(), latex = input.as_str(), "typesetting");
    let markup = typesetter.typeset(input.as_str())?;
    let markup = apply_colors(markup, colors, strategy)?;

    Ok(Preview {
        markup: Some(markup),
        colors: colors.clone(),
        resolution,
    })
}
