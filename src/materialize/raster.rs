//! Raster capture of a preview into PNG.

use crate::color::HexColor;
use crate::error::RenderError;
use crate::markup::Markup;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg;

/// Capture settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// Painted under the equation before it is drawn.
    pub background: HexColor,
    /// Pixels per preview unit.
    pub scale: f32,
}

/// Encoded PNG and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RasterImage {
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Something that can paint a preview into pixels.
///
/// Hosts that render HTML previews (KaTeX, MathML) provide their own
/// implementation backed by their document engine.
pub trait RasterCapture {
    fn capture(&self, markup: &Markup, options: &CaptureOptions) -> Result<RasterImage, RenderError>;
}

/// Captures SVG previews with `resvg`.
///
/// The output is the preview's intrinsic size multiplied by the scale, with
/// no padding. External resources are never fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRasterizer;

impl RasterCapture for SvgRasterizer {
    fn capture(&self, markup: &Markup, options: &CaptureOptions) -> Result<RasterImage, RenderError> {
        let svg = match markup {
            Markup::Svg(svg) => svg,
            Markup::Html(_) => {
                return Err(RenderError::Unsupported(
                    "HTML previews need a host-provided raster capture".into(),
                ))
            }
        };

        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
            .map_err(|err| RenderError::Raster(err.to_string()))?;

        let size = tree.size();
        let width = (size.width() * options.scale).ceil() as u32;
        let height = (size.height() * options.scale).ceil() as u32;
        tracing::debug!(width, height, scale = options.scale, "capturing preview");

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RenderError::Raster(format!("cannot allocate {width}x{height} canvas")))?;
        let (r, g, b, a) = options.background.rgba();
        pixmap.fill(Color::from_rgba8(r, g, b, a));

        resvg::render(
            &tree,
            Transform::from_scale(options.scale, options.scale),
            &mut pixmap.as_mut(),
        );

        let png = pixmap
            .encode_png()
            .map_err(|err| RenderError::Raster(err.to_string()))?;
        Ok(RasterImage { png, width, height })
    }
}
