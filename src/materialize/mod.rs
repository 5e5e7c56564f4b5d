//! Conversion of a styled preview into a transportable image.

mod raster;
mod vector;

pub use raster::{CaptureOptions, RasterCapture, RasterImage, SvgRasterizer};
pub use vector::{rewrap, svg_data_url, VectorImage, VectorOptions, ViewBox};

use crate::color::ColorPair;
use crate::error::RenderError;
use crate::markup::{parse_svg, Markup, MarkupKind};
use crate::state::Resolution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which materializer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Vector for SVG markup, raster for everything else.
    #[default]
    Auto,
    Vector,
    Raster,
}

impl ExportFormat {
    pub fn resolve(self, kind: MarkupKind) -> ExportFormat {
        match (self, kind) {
            (ExportFormat::Auto, MarkupKind::Svg) => ExportFormat::Vector,
            (ExportFormat::Auto, MarkupKind::Html) => ExportFormat::Raster,
            (explicit, _) => explicit,
        }
    }
}

/// Size of the canvas frame that will hold an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

/// How frames are sized from the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOptions {
    /// Multiplier from SVG user units to canvas pixels.
    pub scale: f64,
    /// Used when the preview has no usable `viewBox`.
    pub fallback: FrameSize,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            scale: 0.1,
            fallback: FrameSize {
                width: 600.0,
                height: 200.0,
            },
        }
    }
}

/// An image ready to hand to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub data_url: String,
    pub media_type: &'static str,
    pub frame: FrameSize,
}

/// Turns markup into an [`ExportedImage`].
pub struct Materializer {
    format: ExportFormat,
    vector: VectorOptions,
    frame: FrameOptions,
    capture: Box<dyn RasterCapture>,
}

impl Materializer {
    pub fn new(format: ExportFormat, vector: VectorOptions, frame: FrameOptions) -> Self {
        Self {
            format,
            vector,
            frame,
            capture: Box::new(SvgRasterizer),
        }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Replace the raster capture used for [`ExportFormat::Raster`].
    pub fn with_capture(mut self, capture: Box<dyn RasterCapture>) -> Self {
        self.capture = capture;
        self
    }

    /// Produce an image from the current markup, colors and resolution.
    pub fn materialize(
        &self,
        markup: &Markup,
        colors: &ColorPair,
        resolution: Resolution,
    ) -> Result<ExportedImage, RenderError> {
        match self.format.resolve(markup.kind()) {
            ExportFormat::Raster => self.raster(markup, colors, resolution),
            _ => self.vector(markup, colors),
        }
    }

    fn vector(&self, markup: &Markup, colors: &ColorPair) -> Result<ExportedImage, RenderError> {
        let svg = match markup {
            Markup::Svg(svg) => svg,
            Markup::Html(_) => {
                return Err(RenderError::Unsupported(
                    "vector export requires SVG markup".into(),
                ))
            }
        };

        // Frame size comes from the unpadded equation.
        let preview_box = parse_svg(svg)?.attr("viewBox").and_then(ViewBox::parse);
        let frame = match preview_box {
            Some(vb) => FrameSize {
                width: vb.width * self.frame.scale,
                height: vb.height * self.frame.scale,
            },
            None => self.frame.fallback,
        };

        let image = rewrap(svg, &colors.background, &self.vector)?;
        Ok(ExportedImage {
            data_url: image.data_url,
            media_type: "image/svg+xml",
            frame,
        })
    }

    fn raster(
        &self,
        markup: &Markup,
        colors: &ColorPair,
        resolution: Resolution,
    ) -> Result<ExportedImage, RenderError> {
        let scale = resolution.scale();
        let options = CaptureOptions {
            background: colors.background.clone(),
            scale,
        };
        let image = self.capture.capture(markup, &options)?;

        Ok(ExportedImage {
            data_url: image.data_url(),
            media_type: "image/png",
            frame: FrameSize {
                width: f64::from(image.width) / f64::from(scale),
                height: f64::from(image.height) / f64::from(scale),
            },
        })
    }
}

impl fmt::Debug for Materializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Materializer")
            .field("format", &self.format)
            .field("vector", &self.vector)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}
