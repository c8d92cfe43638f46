//! Layout configuration with explicit-defaults merge
//!
//! `LayoutConfig` is always fully populated; callers that want to tweak
//! a subset supply a `LayoutOverrides` and merge it over the defaults.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Alpha as a unit fraction, for opacity-style renderers
    pub fn alpha_fraction(&self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

/// Parameters of the connector layout
///
/// Immutable once constructed; the layout pass rejects non-positive
/// `line_height` or `width` rather than producing degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Pixels per line in both panes
    pub line_height: f32,
    /// Horizontal span of the spine gutter the curves traverse
    pub width: f32,
    /// Fill of the connector band
    pub fill: Rgba,
    /// Stroke of the connector outline (rendered at a fixed 1px)
    pub stroke: Rgba,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            width: 24.0,
            fill: Rgba::new(128, 128, 128, 51),
            stroke: Rgba::new(128, 128, 128, 89),
        }
    }
}

impl LayoutConfig {
    /// Merge a partial override set over this config
    ///
    /// Unset fields keep their current value; colors that fail to parse
    /// are ignored the same way.
    pub fn with_overrides(&self, overrides: &LayoutOverrides) -> Self {
        Self {
            line_height: overrides.line_height.unwrap_or(self.line_height),
            width: overrides.width.unwrap_or(self.width),
            fill: overrides
                .fill
                .as_deref()
                .and_then(Rgba::parse)
                .unwrap_or(self.fill),
            stroke: overrides
                .stroke
                .as_deref()
                .and_then(Rgba::parse)
                .unwrap_or(self.stroke),
        }
    }
}

/// Partial layout configuration, as read from a config file or CLI
///
/// Colors are carried as hex strings and resolved during the merge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub line_height: Option<f32>,
    pub width: Option<f32>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
}
