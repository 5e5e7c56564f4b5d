//! Plugin configuration, loaded from TOML.
//!
//! ```text
//! backend = "mathjax"
//! color_strategy = "auto"
//! foreground = "#222222"
//!
//! [panel]
//! position = "top right"
//! width = 260
//! height = 406
//!
//! [export]
//! format = "vector"
//! padding = 100.0
//! target_width = 300.0
//! insertion = "upload-then-create"
//!
//! [notify]
//! duration_ms = 3000
//! ```
//!
//! Every key is optional.

use crate::color::{ColorPair, HexColor, Theme};
use crate::error::{ConfigError, Result};
use crate::host::{NotifyOptions, NotifyVariant, PanelOptions};
use crate::materialize::{ExportFormat, FrameOptions, FrameSize, Materializer, VectorOptions};
use crate::postprocess::ColorStrategy;
use crate::state::Resolution;
use crate::submit::Insertion;
use crate::typeset::Backend;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub backend: Backend,
    pub color_strategy: ColorStrategy,
    /// Overrides the theme's text color.
    pub foreground: Option<HexColor>,
    /// Overrides the theme's background color.
    pub background: Option<HexColor>,
    pub panel: PanelOptions,
    pub export: ExportConfig,
    pub notify: NotifyConfig,
}

/// Image export and canvas insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub padding: f64,
    pub target_width: f64,
    pub frame_scale: f64,
    pub default_frame_width: f64,
    pub default_frame_height: f64,
    pub frame_name: String,
    pub insertion: Insertion,
    pub resolution: Resolution,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let vector = VectorOptions::default();
        let frame = FrameOptions::default();
        Self {
            format: ExportFormat::Auto,
            padding: vector.padding,
            target_width: vector.target_width,
            frame_scale: frame.scale,
            default_frame_width: frame.fallback.width,
            default_frame_height: frame.fallback.height,
            frame_name: "Equation Frame".to_string(),
            insertion: Insertion::Auto,
            resolution: Resolution::default(),
        }
    }
}

impl ExportConfig {
    /// Reject sizes that would put `NaN` or non-positive lengths into output.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let positive = [
            ("export.target_width", self.target_width),
            ("export.frame_scale", self.frame_scale),
            ("export.default_frame_width", self.default_frame_width),
            ("export.default_frame_height", self.default_frame_height),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key,
                    message: format!("expected a positive number, got {value}"),
                });
            }
        }

        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "export.padding",
                message: format!("expected zero or a positive number, got {}", self.padding),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub duration_ms: u64,
    /// Keep notifications until dismissed instead of timing out.
    pub dismissible: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            dismissible: false,
        }
    }
}

impl PluginConfig {
    /// MathJax SVG, recolored element by element, padded vector export.
    pub fn vector_padded() -> Self {
        Self::default()
    }

    /// MathJax SVG styled at the root, exported without padding.
    pub fn vector_plain() -> Self {
        let mut config = Self {
            color_strategy: ColorStrategy::RootStyle,
            ..Self::default()
        };
        config.export.padding = 0.0;
        config
    }

    /// KaTeX HTML captured to PNG; the frame is created before its fill.
    pub fn raster() -> Self {
        let mut config = Self {
            backend: Backend::KaTeX,
            ..Self::default()
        };
        config.export.format = ExportFormat::Raster;
        config.export.insertion = Insertion::CreateThenFill;
        config
    }

    pub fn from_toml_str(input: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.export.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }

    /// Starting colors for a host theme, with overrides applied.
    pub fn colors(&self, theme: Theme) -> ColorPair {
        let mut colors = ColorPair::for_theme(theme);
        if let Some(fg) = &self.foreground {
            colors.foreground = fg.clone();
        }
        if let Some(bg) = &self.background {
            colors.background = bg.clone();
        }
        colors
    }

    pub fn materializer(&self) -> Materializer {
        let export = &self.export;
        Materializer::new(
            export.format,
            VectorOptions {
                padding: export.padding,
                target_width: export.target_width,
            },
            FrameOptions {
                scale: export.frame_scale,
                fallback: FrameSize {
                    width: export.default_frame_width,
                    height: export.default_frame_height,
                },
            },
        )
    }

    pub fn notify_options(&self, variant: NotifyVariant) -> NotifyOptions {
        NotifyOptions {
            variant,
            duration_ms: (!self.notify.dismissible).then_some(self.notify.duration_ms),
        }
    }
}
