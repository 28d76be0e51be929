//! Brush and color model for drawn strokes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by brush and color configuration.
#[derive(Debug, Error, PartialEq)]
pub enum BrushError {
    #[error("invalid hex color string: {0:?}")]
    InvalidHexColor(String),
    #[error("color component out of range 0.0..=1.0: {0}")]
    ComponentOutOfRange(f64),
    #[error("brush width must be positive, got {0}")]
    NonPositiveWidth(f64),
    #[error("brush opacity must be within 0.0..=1.0, got {0}")]
    OpacityOutOfRange(f64),
}

/// Normalized RGBA color (each component 0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a color from normalized components, rejecting out-of-range
    /// values rather than clamping them.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Result<Self, BrushError> {
        for component in [r, g, b, a] {
            if !(0.0..=1.0).contains(&component) {
                return Err(BrushError::ComponentOutOfRange(component));
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Create a color from 8-bit components.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parse a `"#RRGGBB"` or `"RRGGBB"` hex string (alpha = 1.0).
    pub fn from_hex(hex: &str) -> Result<Self, BrushError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BrushError::InvalidHexColor(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| BrushError::InvalidHexColor(hex.to_string()))?;
        Ok(Self::from_rgba8(
            ((value & 0xFF0000) >> 16) as u8,
            ((value & 0x00FF00) >> 8) as u8,
            (value & 0x0000FF) as u8,
            255,
        ))
    }

    pub fn black() -> Self {
        Self::from_rgba8(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::from_rgba8(255, 255, 255, 255)
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        peniko::Color::new([
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a as f32,
        ])
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        let rgba = color.to_rgba8();
        Self::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// How a stroke composites onto the canvas. `Clear` acts as an eraser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Clear,
}

impl BlendMode {
    /// The peniko blend for an external rasterizer.
    pub fn to_peniko(self) -> peniko::BlendMode {
        match self {
            BlendMode::Normal => {
                peniko::BlendMode::new(peniko::Mix::Normal, peniko::Compose::SrcOver)
            }
            BlendMode::Clear => {
                peniko::BlendMode::new(peniko::Mix::Normal, peniko::Compose::Clear)
            }
        }
    }
}

/// Stroke styling, snapshotted into each drawn item when a gesture begins.
///
/// Later changes to a live brush never alter items already drawn with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Color,
    /// Stroke width in device-independent units.
    pub width: f64,
    /// Overall alpha applied when compositing (0.0..=1.0).
    pub opacity: f64,
    pub blend_mode: BlendMode,
}

impl Brush {
    /// Create a validated brush. Invalid configuration is rejected up front
    /// rather than silently adjusted.
    pub fn new(
        color: Color,
        width: f64,
        opacity: f64,
        blend_mode: BlendMode,
    ) -> Result<Self, BrushError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(BrushError::NonPositiveWidth(width));
        }
        if !(0.0..=1.0).contains(&opacity) {
            return Err(BrushError::OpacityOutOfRange(opacity));
        }
        Ok(Self {
            color,
            width,
            opacity,
            blend_mode,
        })
    }

    /// An eraser variant of this brush.
    pub fn eraser(mut self) -> Self {
        self.blend_mode = BlendMode::Clear;
        self
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color::black(),
            width: 3.0,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
        }
    }
}
