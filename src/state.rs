//! Transient input state edited by the user.

use crate::color::{ColorPair, Theme};
use serde::{Deserialize, Serialize};

/// Raw LaTeX text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquationInput(String);

impl EquationInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing but whitespace to typeset.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for EquationInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Raster capture density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Low,
    #[default]
    Medium,
    High,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Low, Resolution::Medium, Resolution::High];

    /// Multiplier applied to the preview size when capturing pixels.
    pub fn scale(self) -> f32 {
        match self {
            Resolution::Low => 10.0,
            Resolution::Medium => 25.0,
            Resolution::High => 50.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resolution::Low => "Low",
            Resolution::Medium => "Medium",
            Resolution::High => "High",
        }
    }
}

/// Everything the user can change in the panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub equation: EquationInput,
    pub colors: ColorPair,
    pub resolution: Resolution,
}

impl InputState {
    /// Fresh state with colors taken from the host theme.
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            colors: ColorPair::for_theme(theme),
            ..Default::default()
        }
    }
}
