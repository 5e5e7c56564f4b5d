//! # texframe
//!
//! The core of a design-tool plugin that turns LaTeX into images: typeset an
//! equation, recolor it for the current theme, export it as a vector or raster
//! image and place it on the host canvas.
//!
//! ## Pipeline
//!
//! 1. **Typeset**: a [`Typesetter`] backend turns LaTeX into SVG or HTML markup.
//!    Backends load once through an [`Engine`] that reports its [`Readiness`].
//! 2. **Recolor**: [`apply_colors`] paints the foreground and background color
//!    into the markup, either on every drawable element or on the root style.
//! 3. **Materialize**: a [`Materializer`] re-wraps SVG into a padded, fixed-width
//!    vector image, or captures the preview into a PNG at the chosen
//!    [`Resolution`].
//! 4. **Submit**: a [`Submitter`] checks that the equation, engine and preview
//!    are ready, then drives the [`HostBridge`] to create a frame or replace
//!    the edited image.
//!
//! [`Session`] ties these steps to the input panel.
//!
//! ## Quick Start
//!
//! ```rust
//! use texframe::{apply_colors, rewrap, ColorPair, ColorStrategy, Markup, Theme, VectorOptions};
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 20"><path d="M0 0h40v20z"/></svg>"#;
//! let colors = ColorPair::for_theme(Theme::Light);
//!
//! let styled = apply_colors(Markup::Svg(svg.into()), &colors, ColorStrategy::Auto).unwrap();
//! assert!(styled.as_str().contains(r##"fill="#000000""##));
//!
//! let image = rewrap(styled.as_str(), &colors.background, &VectorOptions::default()).unwrap();
//! assert_eq!(image.view_box.to_string(), "-100 -100 240 220");
//! assert_eq!(image.height, 275.0);
//! assert!(image.data_url.starts_with("data:image/svg+xml;charset=utf-8,"));
//! ```
//!
//! ## Configuration
//!
//! [`PluginConfig`] is read from TOML. Every key is optional; see the
//! [`config`] module for the full layout.
//!
//! ## Features
//!
//! - `mathjax`: MathJax SVG backend (requires the `mathjax` crate)
//! - `katex`: KaTeX HTML backend (requires the `katex` crate)
//! - `mathml`: MathML backend (requires `latex2mathml`)
//! - `wasm`: WebAssembly bindings (requires `wasm-bindgen`)

pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod markup;
pub mod materialize;
pub mod pipeline;
pub mod postprocess;
pub mod session;
pub mod state;
pub mod submit;
pub mod typeset;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod testing;

pub use color::{ColorPair, HexColor, Theme};
pub use config::PluginConfig;
pub use error::{Error, HostError, MarkupError, PreconditionError, RenderError, Result};
pub use host::{HostBridge, HostMode};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use markup::{Markup, MarkupKind};
pub use materialize::{
    rewrap, ExportFormat, ExportedImage, Materializer, RasterCapture, SvgRasterizer, VectorOptions,
};
pub use pipeline::{render, Preview};
pub use postprocess::{apply_colors, ColorStrategy};
pub use session::Session;
pub use state::{EquationInput, InputState, Resolution};
pub use submit::{Insertion, Outcome, Submitter};
pub use typeset::{Backend, Engine, Readiness, Typesetter};
