//! Scene document: the ordered layer collection and its queries.

use crate::layer::{Layer, LayerId, LayoutProps, PrototypeLink};
use crate::style::LayerStyle;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A partial update merged into a layer by [`Scene::update`].
///
/// Every mutation path — drag, resize, external property forms — goes
/// through this merge so that invariants (minimum size, opacity range)
/// are enforced in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerPatch {
    pub name: Option<String>,
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub style: Option<LayerStyle>,
    /// `Some(None)` clears the content.
    pub content: Option<Option<String>>,
    /// `Some(None)` clears the layout record.
    pub layout: Option<Option<LayoutProps>>,
    /// `Some(None)` removes the prototype link.
    pub prototype: Option<Option<PrototypeLink>>,
}

impl LayerPatch {
    /// A patch that moves a layer to a new top-left corner.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// A patch that replaces the full bounding box.
    pub fn bounds(bounds: Rect) -> Self {
        Self {
            position: Some(bounds.origin()),
            width: Some(bounds.width()),
            height: Some(bounds.height()),
            ..Self::default()
        }
    }

    /// A patch that sets or removes the prototype link.
    pub fn link(link: Option<PrototypeLink>) -> Self {
        Self {
            prototype: Some(link),
            ..Self::default()
        }
    }

    /// A patch that replaces the style record.
    pub fn style(style: LayerStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }
}

/// The ordered collection of layers. Array order is draw order: later
/// entries render on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    layers: Vec<Layer>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Order-preserving read of the full collection, e.g. for export.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Append a layer and return its id. New layers always land on top.
    pub fn push(&mut self, layer: Layer) -> LayerId {
        let id = layer.id;
        self.layers.push(layer);
        id
    }

    pub fn contains_id(&self, id: LayerId) -> bool {
        self.layers.iter().any(|l| l.id == id)
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Merge a patch into the matching layer, clamping size and style
    /// fields to their valid ranges. An unknown id is a no-op.
    ///
    /// Returns whether a layer was updated.
    pub fn update(&mut self, id: LayerId, patch: LayerPatch) -> bool {
        let Some(layer) = self.layer_mut(id) else {
            log::debug!("update for unknown layer {id}, ignoring");
            return false;
        };

        if let Some(name) = patch.name {
            layer.name = name;
        }
        if let Some(position) = patch.position {
            layer.position = position;
        }
        if let Some(width) = patch.width {
            layer.width = width.max(Layer::MIN_SIZE);
        }
        if let Some(height) = patch.height {
            layer.height = height.max(Layer::MIN_SIZE);
        }
        if let Some(mut style) = patch.style {
            style.sanitize();
            layer.style = style;
        }
        if let Some(content) = patch.content {
            layer.content = content;
        }
        if let Some(layout) = patch.layout {
            layer.layout = layout;
        }
        if let Some(prototype) = patch.prototype {
            layer.prototype = prototype;
        }
        true
    }

    /// Remove a layer by id. Incoming prototype links that pointed at
    /// it are pruned so the scene never accumulates stale references.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|l| l.id == id)?;
        let removed = self.layers.remove(index);

        for layer in &mut self.layers {
            if layer.prototype.is_some_and(|link| link.target_id == id) {
                log::debug!("pruning prototype link {} -> {}", layer.id, id);
                layer.prototype = None;
            }
        }

        Some(removed)
    }

    /// Topmost layer containing the world point, if any. Later entries
    /// in draw order win, matching what the renderer puts on top.
    pub fn layer_at(&self, point: Point) -> Option<LayerId> {
        self.layers
            .iter()
            .rev()
            .find(|l| l.contains(point))
            .map(|l| l.id)
    }

    /// Topmost layer containing the point, excluding `exclude`. Used to
    /// resolve the drop target of a prototype-connector gesture.
    pub fn link_target_at(&self, point: Point, exclude: LayerId) -> Option<LayerId> {
        self.layers
            .iter()
            .rev()
            .find(|l| l.id != exclude && l.contains(point))
            .map(|l| l.id)
    }

    /// Clone the full ordered collection for a history snapshot.
    pub fn snapshot(&self) -> Vec<Layer> {
        self.layers.clone()
    }

    /// Replace the collection wholesale, e.g. when restoring a history
    /// step or importing a document.
    pub fn restore(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
    }

    /// Serialize the ordered layer list to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
