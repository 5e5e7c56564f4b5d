//! WebAssembly bindings for the plugin UI thread.
//!
//! Typesetting stays in the host page; these bindings cover the steps after
//! it: recoloring the engine's SVG and turning it into an uploadable image.

#![cfg(feature = "wasm")]

use crate::color::{ColorPair, HexColor};
use crate::markup::Markup;
use crate::materialize::{rewrap, FrameOptions, ViewBox, VectorOptions};
use crate::postprocess::{apply_colors, ColorStrategy};
use crate::state::Resolution;
use wasm_bindgen::prelude::*;

fn js_err(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

fn parse_color(value: &str) -> Result<HexColor, JsError> {
    value.parse().map_err(js_err)
}

/// Recolor typeset SVG.
///
/// `strategy` is "auto", "recursive-fill" or "root-style".
#[wasm_bindgen(js_name = recolorSvg)]
pub fn recolor_svg(
    svg: &str,
    foreground: &str,
    background: &str,
    strategy: Option<String>,
) -> Result<String, JsError> {
    let colors = ColorPair {
        foreground: parse_color(foreground)?,
        background: parse_color(background)?,
    };
    let strategy = match strategy.as_deref() {
        Some("recursive-fill") => ColorStrategy::RecursiveFill,
        Some("root-style") => ColorStrategy::RootStyle,
        _ => ColorStrategy::Auto,
    };

    let markup = apply_colors(Markup::Svg(svg.to_string()), &colors, strategy).map_err(js_err)?;
    Ok(markup.as_str().to_string())
}

/// Settings for [`svg_to_data_url`].
#[wasm_bindgen]
pub struct ExportOptions {
    padding: f64,
    target_width: f64,
}

#[wasm_bindgen]
impl ExportOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let defaults = VectorOptions::default();
        Self {
            padding: defaults.padding,
            target_width: defaults.target_width,
        }
    }

    /// Units added around the equation on every side.
    #[wasm_bindgen(js_name = setPadding)]
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
    }

    #[wasm_bindgen(js_name = setTargetWidth)]
    pub fn set_target_width(&mut self, width: f64) {
        self.target_width = width;
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-wrap SVG with padding and a background, as a `data:` URL.
#[wasm_bindgen(js_name = svgToDataUrl)]
pub fn svg_to_data_url(
    svg: &str,
    background: &str,
    options: Option<ExportOptions>,
) -> Result<String, JsError> {
    let options = options.unwrap_or_default();
    let vector = VectorOptions {
        padding: options.padding,
        target_width: options.target_width,
    };
    let image = rewrap(svg, &parse_color(background)?, &vector).map_err(js_err)?;
    Ok(image.data_url)
}

/// Frame size for a preview `viewBox`, as `[width, height]`.
#[wasm_bindgen(js_name = frameSize)]
pub fn frame_size(view_box: &str) -> Vec<f64> {
    let options = FrameOptions::default();
    match ViewBox::parse(view_box) {
        Some(vb) => vec![vb.width * options.scale, vb.height * options.scale],
        None => vec![options.fallback.width, options.fallback.height],
    }
}

/// Capture scale for "low", "medium" or "high".
#[wasm_bindgen(js_name = resolutionScale)]
pub fn resolution_scale(label: &str) -> f32 {
    Resolution::ALL
        .into_iter()
        .find(|r| r.label().eq_ignore_ascii_case(label))
        .unwrap_or_default()
        .scale()
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
