//! Hex colors and the foreground/background pair used for equations.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CSS hex color: `#RGB`, `#RRGGBB` or `#RRGGBBAA`, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// The color as written into markup, e.g. `#F3F3F3`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green, blue and alpha channels.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]) * 17;
                (expand(0), expand(1), expand(2), 255)
            }
            6 => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
                255,
            ),
            _ => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
                channel(&digits[6..8]),
            ),
        }
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ConfigError::InvalidColor(s.to_string()))?;

        let valid_len = matches!(digits.len(), 3 | 6 | 8);
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }

        Ok(HexColor(format!("#{}", digits.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Text color and background color of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: HexColor,
    pub background: HexColor,
}

impl ColorPair {
    /// Default colors for a host theme.
    pub fn for_theme(theme: Theme) -> Self {
        let (fg, bg) = match theme {
            Theme::Dark => ("#FFFFFF", "#000000"),
            Theme::Light => ("#000000", "#F3F3F3"),
        };
        Self {
            foreground: HexColor(fg.to_string()),
            background: HexColor(bg.to_string()),
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::for_theme(Theme::Dark)
    }
}
