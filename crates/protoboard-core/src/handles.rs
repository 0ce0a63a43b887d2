//! Selection handles: corner resize grips and the prototype connector.

use crate::layer::Layer;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Rendered handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 8.0;
/// Handle hit tolerance in screen pixels; divide by zoom for world units.
pub const HANDLE_HIT_TOLERANCE: f64 = 8.0;
/// Prototype connector radius in screen pixels.
pub const CONNECTOR_RADIUS: f64 = 6.0;

/// One of the four corner resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleCorner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl HandleCorner {
    pub const ALL: [HandleCorner; 4] = [
        HandleCorner::NorthWest,
        HandleCorner::NorthEast,
        HandleCorner::SouthEast,
        HandleCorner::SouthWest,
    ];

    /// Short identifier matching the CSS resize-cursor names.
    pub fn id(self) -> &'static str {
        match self {
            HandleCorner::NorthWest => "nw",
            HandleCorner::NorthEast => "ne",
            HandleCorner::SouthEast => "se",
            HandleCorner::SouthWest => "sw",
        }
    }

    fn touches_north(self) -> bool {
        matches!(self, HandleCorner::NorthWest | HandleCorner::NorthEast)
    }

    fn touches_west(self) -> bool {
        matches!(self, HandleCorner::NorthWest | HandleCorner::SouthWest)
    }

    /// World position of this handle on a bounding box.
    pub fn position(self, bounds: Rect) -> Point {
        match self {
            HandleCorner::NorthWest => Point::new(bounds.x0, bounds.y0),
            HandleCorner::NorthEast => Point::new(bounds.x1, bounds.y0),
            HandleCorner::SouthEast => Point::new(bounds.x1, bounds.y1),
            HandleCorner::SouthWest => Point::new(bounds.x0, bounds.y1),
        }
    }
}

/// Find which corner handle of `bounds` the point hits, if any.
/// `tolerance` is in world units (screen tolerance divided by zoom).
pub fn handle_at(bounds: Rect, point: Point, tolerance: f64) -> Option<HandleCorner> {
    HandleCorner::ALL.into_iter().find(|corner| {
        let pos = corner.position(bounds);
        let dx = point.x - pos.x;
        let dy = point.y - pos.y;
        dx * dx + dy * dy <= tolerance * tolerance
    })
}

/// World position of the prototype connector affordance: the midpoint
/// of the right edge.
pub fn connector_anchor(bounds: Rect) -> Point {
    Point::new(bounds.x1, bounds.y0 + bounds.height() / 2.0)
}

/// Whether the point hits the connector affordance.
pub fn connector_hit(bounds: Rect, point: Point, tolerance: f64) -> bool {
    let anchor = connector_anchor(bounds);
    let dx = point.x - anchor.x;
    let dy = point.y - anchor.y;
    dx * dx + dy * dy <= tolerance * tolerance
}

/// Resize a frozen starting box by a world-space delta from the given
/// corner. Each axis is adjusted independently: east/south corners grow
/// the size directly, west/north corners shrink it and shift the origin
/// so the opposite edge stays pinned.
///
/// Width and height are floored at [`Layer::MIN_SIZE`]; the origin is
/// derived from the clamped size, so the opposite edge holds even when
/// the floor kicks in.
pub fn resize_box(start: Rect, corner: HandleCorner, delta: Vec2) -> Rect {
    let mut origin = start.origin();
    let mut width = start.width();
    let mut height = start.height();

    if corner.touches_west() {
        width = (width - delta.x).max(Layer::MIN_SIZE);
        origin.x = start.x1 - width;
    } else {
        width = (width + delta.x).max(Layer::MIN_SIZE);
    }

    if corner.touches_north() {
        height = (height - delta.y).max(Layer::MIN_SIZE);
        origin.y = start.y1 - height;
    } else {
        height = (height + delta.y).max(Layer::MIN_SIZE);
    }

    Rect::from_origin_size(origin, Size::new(width, height))
}
