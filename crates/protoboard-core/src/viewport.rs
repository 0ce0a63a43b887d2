//! Viewport transform between screen and world coordinates.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f64 = 10.0;

/// The viewport maps between screen coordinates (raw pointer events)
/// and world coordinates (layer positions) through a pan offset and a
/// zoom factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset in screen pixels.
    pub offset: Vec2,
    /// Zoom factor (1.0 = 100%), always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// World-to-screen affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Screen-to-world affine transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to world coordinates:
    /// `(screen - offset) / zoom` per axis.
    pub fn to_world(&self, screen: Point) -> Point {
        self.inverse_transform() * screen
    }

    /// Convert a world point to screen coordinates.
    pub fn to_screen(&self, world: Point) -> Point {
        self.transform() * world
    }

    /// Pan by a delta in screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Adjust zoom additively and clamp to `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// With `anchor` set, the world point under that screen position
    /// stays fixed while zooming; without it the view recenters on the
    /// viewport origin.
    pub fn zoom_by(&mut self, delta: f64, anchor: Option<Point>) {
        let new_zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        match anchor {
            Some(screen) => {
                let world = self.to_world(screen);
                self.zoom = new_zoom;

                // Shift the pan offset so `world` stays under `screen`.
                let shifted = self.to_screen(world);
                self.offset += screen - shifted;
            }
            None => self.zoom = new_zoom,
        }
    }

    /// Reset to the default pan and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let vp = Viewport::new();
        assert_eq!(vp.offset, Vec2::ZERO);
        assert!((vp.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_world_identity() {
        let vp = Viewport::new();
        let world = vp.to_world(Point::new(100.0, 200.0));
        assert!((world.x - 100.0).abs() < f64::EPSILON);
        assert!((world.y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_world_with_offset_and_zoom() {
        let mut vp = Viewport::new();
        vp.offset = Vec2::new(50.0, 100.0);
        vp.zoom = 2.0;
        let world = vp.to_world(Point::new(150.0, 300.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut vp = Viewport::new();
        vp.offset = Vec2::new(30.0, -20.0);
        vp.zoom = 1.5;

        let original = Point::new(123.0, 456.0);
        let back = vp.to_screen(vp.to_world(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_zoom_clamps_low_and_high() {
        let mut vp = Viewport::new();
        vp.zoom_by(-100.0, None);
        assert!((vp.zoom - MIN_ZOOM).abs() < f64::EPSILON);

        vp.zoom_by(100.0, None);
        assert!((vp.zoom - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_is_additive() {
        let mut vp = Viewport::new();
        vp.zoom_by(0.5, None);
        assert!((vp.zoom - 1.5).abs() < f64::EPSILON);
        vp.zoom_by(-0.7, None);
        assert!((vp.zoom - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_anchored_zoom_keeps_point_fixed() {
        let mut vp = Viewport::new();
        vp.offset = Vec2::new(40.0, 10.0);

        let anchor = Point::new(200.0, 150.0);
        let world_before = vp.to_world(anchor);
        vp.zoom_by(1.0, Some(anchor));
        let world_after = vp.to_world(anchor);

        assert!((world_before.x - world_after.x).abs() < 1e-10);
        assert!((world_before.y - world_after.y).abs() < 1e-10);
    }

    #[test]
    fn test_pan_accumulates() {
        let mut vp = Viewport::new();
        vp.pan(Vec2::new(10.0, 20.0));
        vp.pan(Vec2::new(-4.0, 6.0));
        assert!((vp.offset.x - 6.0).abs() < f64::EPSILON);
        assert!((vp.offset.y - 26.0).abs() < f64::EPSILON);
    }
}
