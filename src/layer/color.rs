//! Layer colors
//!
//! Colors are stored as RGBA bytes and serialized as `#rrggbbaa` strings.
//! Parsing accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, and a small set of
//! named colors.

use crate::error::LinePlotError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// RGBA color of a layer or highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LayerColor(pub [u8; 4]);

impl LayerColor {
    pub const BLACK: LayerColor = LayerColor([0, 0, 0, 255]);
    pub const WHITE: LayerColor = LayerColor([255, 255, 255, 255]);
    pub const RED: LayerColor = LayerColor([255, 0, 0, 255]);
    pub const GREEN: LayerColor = LayerColor([0, 128, 0, 255]);
    pub const BLUE: LayerColor = LayerColor([0, 0, 255, 255]);
    pub const YELLOW: LayerColor = LayerColor([255, 255, 0, 255]);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        LayerColor([r, g, b, 255])
    }

    /// Color from RGBA components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        LayerColor([r, g, b, a])
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, alpha: u8) -> Self {
        let [r, g, b, _] = self.0;
        LayerColor([r, g, b, alpha])
    }

    /// Same color with alpha scaled by `opacity` (0.0 - 1.0)
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = (self.0[3] as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(alpha)
    }

    /// Generate a distinct color based on an index
    /// Uses the golden ratio to spread hues evenly across the color wheel
    pub fn generate(index: u32) -> Self {
        const GOLDEN_RATIO: f32 = 0.618033988749895;

        let hue = ((index as f32 * GOLDEN_RATIO) % 1.0) * 360.0;
        let (r, g, b) = hsv_to_rgb(hue, 0.7, 0.85);
        LayerColor([r, g, b, 255])
    }

    /// Lowercase `#rrggbbaa` representation
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0;
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => LayerColor::BLACK,
            "white" => LayerColor::WHITE,
            "red" => LayerColor::RED,
            "green" => LayerColor::GREEN,
            "blue" => LayerColor::BLUE,
            "yellow" => LayerColor::YELLOW,
            "cyan" => LayerColor::rgb(0, 255, 255),
            "magenta" => LayerColor::rgb(255, 0, 255),
            "orange" => LayerColor::rgb(255, 165, 0),
            "gray" | "grey" => LayerColor::rgb(128, 128, 128),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for LayerColor {
    type Err = LinePlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || LinePlotError::InvalidColor(s.to_string());

        let Some(hex) = trimmed.strip_prefix('#') else {
            return LayerColor::named(&trimmed.to_ascii_lowercase()).ok_or_else(invalid);
        };

        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    rgb[i] = v * 17;
                }
                Ok(LayerColor::rgb(rgb[0], rgb[1], rgb[2]))
            }
            6 => Ok(LayerColor::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(LayerColor::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for LayerColor {
    type Error = LinePlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LayerColor> for String {
    fn from(color: LayerColor) -> Self {
        color.to_hex()
    }
}

impl From<LayerColor> for egui::Color32 {
    fn from(color: LayerColor) -> Self {
        let [r, g, b, a] = color.0;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl From<egui::Color32> for LayerColor {
    fn from(color: egui::Color32) -> Self {
        LayerColor(color.to_srgba_unmultiplied())
    }
}

impl std::fmt::Display for LayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Convert HSV (hue 0-360, saturation 0-1, value 0-1) to RGB (u8, u8, u8)
fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!("red".parse::<LayerColor>().unwrap(), LayerColor::RED);
        assert_eq!("Grey".parse::<LayerColor>().unwrap(), LayerColor::rgb(128, 128, 128));
        assert!("chartreuse-ish".parse::<LayerColor>().is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<LayerColor>().unwrap(), LayerColor::rgb(255, 128, 0));
        assert_eq!("#f00".parse::<LayerColor>().unwrap(), LayerColor::RED);
        assert_eq!(
            "#00ff0080".parse::<LayerColor>().unwrap(),
            LayerColor::rgba(0, 255, 0, 128)
        );
        assert!("#12345".parse::<LayerColor>().is_err());
        assert!("#gg0000".parse::<LayerColor>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&LayerColor::BLUE).unwrap();
        assert_eq!(json, "\"#0000ffff\"");
        let back: LayerColor = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(back, LayerColor::BLUE);
    }

    #[test]
    fn test_opacity_scales_alpha() {
        assert_eq!(LayerColor::RED.with_opacity(0.5).0[3], 128);
        assert_eq!(LayerColor::RED.with_opacity(2.0).0[3], 255);
    }

    #[test]
    fn test_generated_colors_differ() {
        let a = LayerColor::generate(0);
        let b = LayerColor::generate(1);
        assert_ne!(a, b);
        assert_eq!(a.0[3], 255);
    }
}
