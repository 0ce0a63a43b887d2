//! Style properties for layers.

use kurbo::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color stored as 8-bit channels.
///
/// Serialized as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when the
/// alpha channel is not fully opaque) so exported documents stay
/// readable by web tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a CSS hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    ///
    /// Bad input falls back to black rather than erroring; style edits
    /// must never interrupt an interaction.
    pub fn from_hex(hex: &str) -> Self {
        if hex.eq_ignore_ascii_case("transparent") {
            return Self::transparent();
        }

        if let Some(digits) = hex.trim().strip_prefix('#') {
            match digits.len() {
                3 => {
                    let r = u8::from_str_radix(&digits[0..1], 16).unwrap_or(0) * 17;
                    let g = u8::from_str_radix(&digits[1..2], 16).unwrap_or(0) * 17;
                    let b = u8::from_str_radix(&digits[2..3], 16).unwrap_or(0) * 17;
                    return Self::new(r, g, b, 255);
                }
                6 => {
                    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
                    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
                    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
                    return Self::new(r, g, b, 255);
                }
                8 => {
                    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
                    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
                    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
                    let a = u8::from_str_radix(&digits[6..8], 16).unwrap_or(255);
                    return Self::new(r, g, b, a);
                }
                _ => {}
            }
        }

        Self::black()
    }

    /// Format as a CSS hex string.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Ok(Color::from_hex(&hex))
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Typography attributes carried by text-bearing layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default)]
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_family: "Inter".to_string(),
            font_weight: None,
            align: TextAlign::Left,
        }
    }
}

/// Kind of visual effect attached to a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
}

/// A single visual effect. The core stores these as-is; rendering them
/// is the display layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

/// Style properties for a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f64,
    pub corner_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            fill: Color::from_hex("#D9D9D9"),
            stroke: Color::black(),
            stroke_width: 0.0,
            opacity: 1.0,
            corner_radius: 0.0,
            text: None,
            effects: Vec::new(),
        }
    }
}

impl LayerStyle {
    /// Clamp fields to their valid ranges. Invoked on every path that
    /// accepts a style from outside the engine.
    pub fn sanitize(&mut self) {
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self.stroke_width = self.stroke_width.max(0.0);
        self.corner_radius = self.corner_radius.max(0.0);
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = Some(text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse_short() {
        let c = Color::from_hex("#f0a");
        assert_eq!(c, Color::new(255, 0, 170, 255));
    }

    #[test]
    fn test_hex_parse_full() {
        let c = Color::from_hex("#D9D9D9");
        assert_eq!(c, Color::new(217, 217, 217, 255));
    }

    #[test]
    fn test_hex_parse_with_alpha() {
        let c = Color::from_hex("#00000080");
        assert_eq!(c.a, 128);
    }

    #[test]
    fn test_hex_parse_garbage_falls_back_to_black() {
        assert_eq!(Color::from_hex("not-a-color"), Color::black());
        assert_eq!(Color::from_hex("#12"), Color::black());
    }

    #[test]
    fn test_hex_parse_transparent_keyword() {
        assert_eq!(Color::from_hex("transparent"), Color::transparent());
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Color::new(13, 153, 255, 255);
        assert_eq!(Color::from_hex(&c.to_hex()), c);

        let translucent = Color::new(13, 153, 255, 128);
        assert_eq!(Color::from_hex(&translucent.to_hex()), translucent);
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::new(255, 215, 0, 255)).unwrap();
        assert_eq!(json, "\"#ffd700\"");

        let back: Color = serde_json::from_str("\"#FFD700\"").unwrap();
        assert_eq!(back, Color::new(255, 215, 0, 255));
    }

    #[test]
    fn test_sanitize_clamps_opacity() {
        let mut style = LayerStyle {
            opacity: 1.8,
            stroke_width: -2.0,
            ..LayerStyle::default()
        };
        style.sanitize();
        assert!((style.opacity - 1.0).abs() < f64::EPSILON);
        assert!((style.stroke_width).abs() < f64::EPSILON);
    }
}
