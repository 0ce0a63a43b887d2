//! Collaborator presence data.
//!
//! Multi-user editing is not part of the engine; this shape exists so
//! the hosting session layer has a stable type to exchange. Nothing in
//! the core reads it.

use crate::layer::LayerId;
use crate::style::Color;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cursor presence of another session participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    /// Cursor accent color.
    pub color: Color,
    /// Cursor position in world coordinates.
    pub position: Point,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selection: Vec<LayerId>,
}

impl Collaborator {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color,
            position: Point::ZERO,
            selection: Vec::new(),
        }
    }
}
