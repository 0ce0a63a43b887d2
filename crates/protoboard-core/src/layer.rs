//! Layer data model.

use crate::style::LayerStyle;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for layers.
pub type LayerId = Uuid;

/// The visual kind of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerKind {
    Rectangle,
    Circle,
    Text,
    Sticky,
    Frame,
}

/// Auto-layout flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Row,
    Column,
}

/// Cross-axis alignment for auto-layout children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutAlign {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
}

/// Main-axis distribution for auto-layout children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutJustify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

/// Auto-layout configuration.
///
/// The engine stores and round-trips this record; no flow solver runs
/// here. Rendering and export collaborators interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutProps {
    pub is_auto_layout: bool,
    pub direction: LayoutDirection,
    pub gap: f64,
    pub padding: f64,
    pub align_items: LayoutAlign,
    pub justify_content: LayoutJustify,
}

impl Default for LayoutProps {
    fn default() -> Self {
        Self {
            is_auto_layout: false,
            direction: LayoutDirection::Row,
            gap: 10.0,
            padding: 10.0,
            align_items: LayoutAlign::FlexStart,
            justify_content: LayoutJustify::FlexStart,
        }
    }
}

/// What fires a prototype link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkTrigger {
    #[default]
    OnClick,
    OnHover,
}

/// Transition animation hint for a prototype link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkAnimation {
    #[default]
    Instant,
    Dissolve,
    Slide,
}

/// A directed, triggerable reference from one layer to another.
///
/// The target id may dangle after its layer is deleted; a dangling link
/// simply fails to resolve, it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrototypeLink {
    pub target_id: LayerId,
    pub trigger: LinkTrigger,
    pub animation: LinkAnimation,
}

impl PrototypeLink {
    /// A link to `target` with the default trigger and animation, as
    /// written by the connector drop gesture.
    pub fn to(target: LayerId) -> Self {
        Self {
            target_id: target,
            trigger: LinkTrigger::default(),
            animation: LinkAnimation::default(),
        }
    }
}

/// A single positioned visual entity in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub kind: LayerKind,
    /// Top-left corner in world coordinates.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub style: LayerStyle,
    /// Free-text content, used by text and sticky layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutProps>,
    /// Flat parent reference; the engine does not traverse hierarchies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<LayerId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype: Option<PrototypeLink>,
}

impl Layer {
    /// Smallest width/height a layer may have, in world units.
    pub const MIN_SIZE: f64 = 1.0;

    /// Create a new layer. Width and height are floored at
    /// [`Layer::MIN_SIZE`].
    pub fn new(
        kind: LayerKind,
        name: impl Into<String>,
        position: Point,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            position,
            width: width.max(Self::MIN_SIZE),
            height: height.max(Self::MIN_SIZE),
            style: LayerStyle::default(),
            content: None,
            layout: None,
            parent_id: None,
            children: Vec::new(),
            prototype: None,
        }
    }

    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Bounding box in world coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Size::new(self.width, self.height))
    }

    /// Inclusive axis-aligned containment test. Edges count as inside
    /// so that clicking a 1px-wide layer still hits it.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.height
    }

    /// Move the layer to a new top-left corner.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Replace the bounding box, flooring the size at
    /// [`Layer::MIN_SIZE`].
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.position = bounds.origin();
        self.width = bounds.width().max(Self::MIN_SIZE);
        self.height = bounds.height().max(Self::MIN_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer_floors_size() {
        let layer = Layer::new(LayerKind::Rectangle, "r", Point::new(0.0, 0.0), 0.0, -5.0);
        assert!((layer.width - Layer::MIN_SIZE).abs() < f64::EPSILON);
        assert!((layer.height - Layer::MIN_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let layer = Layer::new(LayerKind::Rectangle, "r", Point::new(10.0, 10.0), 100.0, 50.0);
        assert!(layer.contains(Point::new(10.0, 10.0)));
        assert!(layer.contains(Point::new(110.0, 60.0)));
        assert!(layer.contains(Point::new(50.0, 30.0)));
        assert!(!layer.contains(Point::new(110.1, 30.0)));
        assert!(!layer.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn test_bounds() {
        let layer = Layer::new(LayerKind::Frame, "f", Point::new(100.0, 100.0), 393.0, 852.0);
        let bounds = layer.bounds();
        assert!((bounds.x0 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 493.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 952.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prototype_link_defaults() {
        let target = Uuid::new_v4();
        let link = PrototypeLink::to(target);
        assert_eq!(link.target_id, target);
        assert_eq!(link.trigger, LinkTrigger::OnClick);
        assert_eq!(link.animation, LinkAnimation::Instant);
    }

    #[test]
    fn test_kind_serializes_screaming() {
        let json = serde_json::to_string(&LayerKind::Sticky).unwrap();
        assert_eq!(json, "\"STICKY\"");
        let json = serde_json::to_string(&LinkTrigger::OnClick).unwrap();
        assert_eq!(json, "\"ON_CLICK\"");
    }

    #[test]
    fn test_layer_json_roundtrip() {
        let mut layer = Layer::new(LayerKind::Sticky, "Sticky", Point::new(5.0, 6.0), 150.0, 150.0)
            .with_content("Notes...");
        layer.prototype = Some(PrototypeLink::to(Uuid::new_v4()));
        layer.layout = Some(LayoutProps::default());

        let json = serde_json::to_string(&layer).unwrap();
        let back: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layer);
    }
}
