//! Tool selection and single-shot layer creation.

use crate::layer::{Layer, LayerKind};
use crate::style::{Color, LayerStyle, TextStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools. Shape tools create exactly one layer per click and
/// then snap back to [`ToolKind::Select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Select,
    Hand,
    Frame,
    Rectangle,
    Circle,
    Text,
    Sticky,
}

impl ToolKind {
    /// Whether a pointer-down on empty canvas creates a layer.
    pub fn creates_layer(self) -> bool {
        !matches!(self, ToolKind::Select | ToolKind::Hand)
    }

    /// Build the layer this tool stamps at a world point, with the
    /// tool-specific default size and style. `Select` and `Hand`
    /// return `None`.
    pub fn spawn(self, at: Point) -> Option<Layer> {
        let layer = match self {
            ToolKind::Select | ToolKind::Hand => return None,
            ToolKind::Frame => Layer::new(LayerKind::Frame, "Frame", at, 300.0, 200.0)
                .with_style(LayerStyle::default().with_fill(Color::white())),
            ToolKind::Rectangle => {
                Layer::new(LayerKind::Rectangle, "Rectangle", at, 100.0, 100.0)
            }
            ToolKind::Circle => Layer::new(LayerKind::Circle, "Ellipse", at, 100.0, 100.0)
                .with_style(LayerStyle::default().with_corner_radius(50.0)),
            ToolKind::Text => Layer::new(LayerKind::Text, "Text", at, 100.0, 24.0)
                .with_style(
                    LayerStyle::default()
                        .with_fill(Color::black())
                        .with_text(TextStyle::default()),
                )
                .with_content("Type something..."),
            ToolKind::Sticky => Layer::new(LayerKind::Sticky, "Sticky", at, 150.0, 150.0)
                .with_style(
                    LayerStyle::default()
                        .with_fill(Color::from_hex("#FFD700"))
                        .with_corner_radius(4.0),
                )
                .with_content("Notes..."),
        };
        Some(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextAlign;

    #[test]
    fn test_select_and_hand_create_nothing() {
        assert!(ToolKind::Select.spawn(Point::ZERO).is_none());
        assert!(ToolKind::Hand.spawn(Point::ZERO).is_none());
        assert!(!ToolKind::Select.creates_layer());
        assert!(!ToolKind::Hand.creates_layer());
    }

    #[test]
    fn test_rectangle_defaults() {
        let layer = ToolKind::Rectangle.spawn(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(layer.kind, LayerKind::Rectangle);
        assert_eq!(layer.position, Point::new(50.0, 50.0));
        assert!((layer.width - 100.0).abs() < f64::EPSILON);
        assert!((layer.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(layer.style.fill, Color::from_hex("#D9D9D9"));
        assert!(layer.content.is_none());
    }

    #[test]
    fn test_circle_is_fully_rounded() {
        let layer = ToolKind::Circle.spawn(Point::ZERO).unwrap();
        assert_eq!(layer.kind, LayerKind::Circle);
        assert_eq!(layer.name, "Ellipse");
        assert!((layer.style.corner_radius - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_defaults() {
        let layer = ToolKind::Frame.spawn(Point::ZERO).unwrap();
        assert!((layer.width - 300.0).abs() < f64::EPSILON);
        assert!((layer.height - 200.0).abs() < f64::EPSILON);
        assert_eq!(layer.style.fill, Color::white());
    }

    #[test]
    fn test_text_has_placeholder_and_typography() {
        let layer = ToolKind::Text.spawn(Point::ZERO).unwrap();
        assert!((layer.height - 24.0).abs() < f64::EPSILON);
        assert_eq!(layer.content.as_deref(), Some("Type something..."));
        let text = layer.style.text.expect("text style");
        assert!((text.font_size - 16.0).abs() < f64::EPSILON);
        assert_eq!(text.font_family, "Inter");
        assert_eq!(text.align, TextAlign::Left);
    }

    #[test]
    fn test_sticky_has_accent_fill() {
        let layer = ToolKind::Sticky.spawn(Point::ZERO).unwrap();
        assert!((layer.width - 150.0).abs() < f64::EPSILON);
        assert_eq!(layer.content.as_deref(), Some("Notes..."));
        assert_eq!(layer.style.fill, Color::from_hex("#FFD700"));
        assert!((layer.style.corner_radius - 4.0).abs() < f64::EPSILON);
    }
}
