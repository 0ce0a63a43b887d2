//! Boundary types for the external generative design service.
//!
//! The service itself lives outside the core: something else sends the
//! prompt and awaits the response. The core only receives a finished
//! [`GeneratedLayer`] (or nothing) and folds it into the scene through
//! the normal creation-and-commit path.

use crate::layer::{Layer, LayerKind};
use crate::style::{Color, TextAlign, TextStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the generative collaborator. None of these
/// mutate scene or history state.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("service returned no usable layer")]
    Empty,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed layer description: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Partial layer description produced by the generative service.
/// Every field is optional; [`GeneratedLayer::into_layer`] fills the
/// gaps with the standard creation defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedLayer {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<LayerKind>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill: Option<Color>,
    pub content: Option<String>,
}

impl GeneratedLayer {
    /// Parse the service's JSON payload. An empty body maps to
    /// [`GenerateError::Empty`], malformed JSON to
    /// [`GenerateError::Malformed`].
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        if json.trim().is_empty() {
            return Err(GenerateError::Empty);
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Materialize a full layer at the given world position.
    pub fn into_layer(self, at: Point) -> Layer {
        let kind = self.kind.unwrap_or(LayerKind::Rectangle);
        let name = self.name.unwrap_or_else(|| "Generated Layer".to_string());

        let mut layer = Layer::new(
            kind,
            name,
            at,
            self.width.unwrap_or(100.0),
            self.height.unwrap_or(100.0),
        );
        if let Some(fill) = self.fill {
            layer.style.fill = fill;
        }
        // Fully round circles; a slight radius everywhere else.
        layer.style.corner_radius = match kind {
            LayerKind::Circle => 999.0,
            _ => 4.0,
        };
        if matches!(kind, LayerKind::Text | LayerKind::Sticky) {
            layer.style.text = Some(TextStyle {
                align: TextAlign::Center,
                ..TextStyle::default()
            });
        }
        layer.content = self.content;
        layer
    }
}
