//! The editor state container and pointer-interaction state machine.
//!
//! All mutable UI state (scene, selection, viewport, history) lives in
//! one [`Editor`] owned by the application root. Every pointer, wheel,
//! and action entry point runs synchronously and leaves the state
//! machine in a coherent gesture or back at [`Interaction::Idle`].

use crate::generative::GeneratedLayer;
use crate::handles::{self, CONNECTOR_RADIUS, HANDLE_HIT_TOLERANCE, HandleCorner};
use crate::history::History;
use crate::input::{Modifiers, MouseButton};
use crate::layer::{Layer, LayerId, PrototypeLink};
use crate::scene::{LayerPatch, Scene};
use crate::tools::ToolKind;
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom change per wheel unit when the command modifier is held.
pub const WHEEL_ZOOM_STEP: f64 = 0.001;

/// Screen-pixel inset from the visible origin where generated layers
/// are placed.
const GENERATED_LAYER_INSET: f64 = 100.0;

/// Editing mode: free manipulation vs. prototype-link authoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    Design,
    Prototype,
}

/// The active pointer gesture. Drag variants freeze the layer's
/// starting box at pointer-down and recompute absolute positions from
/// it on every move, so intermediate samples can be skipped or
/// coalesced without drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    Panning {
        last_screen: Point,
    },
    Moving {
        layer: LayerId,
        start_screen: Point,
        start_box: Rect,
    },
    Resizing {
        layer: LayerId,
        corner: HandleCorner,
        start_screen: Point,
        start_box: Rect,
    },
    ConnectingPrototype {
        source: LayerId,
    },
}

/// High-level commands exposed to the hosting shell. The keyboard
/// dispatch table lives outside the core and maps key chords onto
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    DeleteSelected,
    /// Clear the selection and reset the tool to Select (Escape).
    Deselect,
    SetTool(ToolKind),
    SetMode(EditorMode),
}

/// The owned state container for one editing session.
#[derive(Debug)]
pub struct Editor {
    pub scene: Scene,
    pub viewport: Viewport,
    history: History,
    selection: Option<LayerId>,
    tool: ToolKind,
    mode: EditorMode,
    interaction: Interaction,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::new(),
            history: History::new(),
            selection: None,
            tool: ToolKind::Select,
            mode: EditorMode::Design,
            interaction: Interaction::Idle,
        }
    }

    pub fn selection(&self) -> Option<LayerId> {
        self.selection
    }

    pub fn selected_layer(&self) -> Option<&Layer> {
        self.scene.layer(self.selection?)
    }

    /// Select a layer by id; unknown ids clear the selection.
    pub fn select(&mut self, id: LayerId) {
        self.selection = self.scene.contains_id(id).then_some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch the active tool. Picking a tool drops the selection, as
    /// the next click starts a fresh intent.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.selection = None;
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Commit the current (scene, selection) pair to history. Gesture
    /// handlers call this at meaningful boundaries; external callers
    /// use it to finalize property edits.
    pub fn commit(&mut self) {
        self.history.record(self.scene.snapshot(), self.selection);
    }

    /// Central update path for external property edits; the same merge
    /// and clamping as drag-driven updates. Does not commit history.
    pub fn update_layer(&mut self, id: LayerId, patch: LayerPatch) -> bool {
        self.scene.update(id, patch)
    }

    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::DeleteSelected => {
                self.delete_selected();
            }
            EditorAction::Deselect => self.escape(),
            EditorAction::SetTool(tool) => self.set_tool(tool),
            EditorAction::SetMode(mode) => self.set_mode(mode),
        }
    }

    // --- Pointer events -------------------------------------------------

    /// Begin a gesture. Middle button always pans; otherwise the active
    /// tool decides between creation, pan, and selection semantics.
    pub fn pointer_down(&mut self, screen: Point, button: MouseButton) {
        if self.interaction != Interaction::Idle {
            return;
        }

        if button == MouseButton::Middle || self.tool == ToolKind::Hand {
            self.interaction = Interaction::Panning {
                last_screen: screen,
            };
            return;
        }
        if button != MouseButton::Left {
            return;
        }

        let world = self.viewport.to_world(screen);

        if self.tool.creates_layer() {
            if let Some(layer) = self.tool.spawn(world) {
                log::debug!("creating {:?} at {:?}", layer.kind, world);
                let id = self.scene.push(layer);
                self.selection = Some(id);
                self.commit();
                // Single-shot creation: snap straight back to Select.
                self.tool = ToolKind::Select;
            }
            return;
        }

        // Select tool: affordances of the current selection win over
        // layer bodies, matching their on-top render order.
        if let Some(selected) = self.selection {
            if let Some(bounds) = self.scene.layer(selected).map(Layer::bounds) {
                match self.mode {
                    EditorMode::Design => {
                        let tolerance = HANDLE_HIT_TOLERANCE / self.viewport.zoom;
                        if let Some(corner) = handles::handle_at(bounds, world, tolerance) {
                            self.interaction = Interaction::Resizing {
                                layer: selected,
                                corner,
                                start_screen: screen,
                                start_box: bounds,
                            };
                            return;
                        }
                    }
                    EditorMode::Prototype => {
                        let tolerance = CONNECTOR_RADIUS / self.viewport.zoom;
                        if handles::connector_hit(bounds, world, tolerance) {
                            self.interaction =
                                Interaction::ConnectingPrototype { source: selected };
                            return;
                        }
                    }
                }
            }
        }

        match self.scene.layer_at(world) {
            Some(id) => {
                if let Some(layer) = self.scene.layer(id) {
                    let start_box = layer.bounds();
                    self.selection = Some(id);
                    self.interaction = Interaction::Moving {
                        layer: id,
                        start_screen: screen,
                        start_box,
                    };
                }
            }
            None => self.selection = None,
        }
    }

    /// Advance the active gesture. Safe to call at any sampling rate:
    /// drags recompute from the frozen start state, never accumulate.
    pub fn pointer_move(&mut self, screen: Point) {
        match self.interaction {
            Interaction::Panning { last_screen } => {
                self.viewport.pan(screen - last_screen);
                self.interaction = Interaction::Panning {
                    last_screen: screen,
                };
            }
            Interaction::Moving {
                layer,
                start_screen,
                start_box,
            } => {
                let delta = (screen - start_screen) / self.viewport.zoom;
                self.scene
                    .update(layer, LayerPatch::position(start_box.origin() + delta));
            }
            Interaction::Resizing {
                layer,
                corner,
                start_screen,
                start_box,
            } => {
                let delta = (screen - start_screen) / self.viewport.zoom;
                let resized = handles::resize_box(start_box, corner, delta);
                self.scene.update(layer, LayerPatch::bounds(resized));
            }
            Interaction::ConnectingPrototype { .. } | Interaction::Idle => {}
        }
    }

    /// Finish the active gesture at a release point.
    pub fn pointer_up(&mut self, screen: Point) {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::ConnectingPrototype { source } => {
                let world = self.viewport.to_world(screen);
                match self.scene.link_target_at(world, source) {
                    Some(target) => {
                        log::debug!("linking {source} -> {target}");
                        self.scene
                            .update(source, LayerPatch::link(Some(PrototypeLink::to(target))));
                        self.commit();
                    }
                    // Dropped over empty space: the gesture dissolves.
                    None => {}
                }
            }
            Interaction::Moving {
                layer, start_box, ..
            }
            | Interaction::Resizing {
                layer, start_box, ..
            } => self.finish_drag(layer, start_box),
            Interaction::Panning { .. } | Interaction::Idle => {}
        }
    }

    /// The pointer left the canvas: treated exactly like a release.
    /// A connector drag has no release point, so its link is dropped.
    pub fn pointer_leave(&mut self) {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Moving {
                layer, start_box, ..
            }
            | Interaction::Resizing {
                layer, start_box, ..
            } => self.finish_drag(layer, start_box),
            _ => {}
        }
    }

    /// Wheel input: command-modified wheel zooms (recentring on the
    /// viewport origin), plain wheel pans by the raw deltas.
    pub fn wheel(&mut self, delta: Vec2, modifiers: Modifiers) {
        if modifiers.command() {
            self.viewport.zoom_by(-delta.y * WHEEL_ZOOM_STEP, None);
        } else {
            self.viewport.pan(-delta);
        }
    }

    /// Commit a finished drag, but only when it changed the box: a
    /// plain click-select records nothing.
    fn finish_drag(&mut self, layer: LayerId, start_box: Rect) {
        let changed = self
            .scene
            .layer(layer)
            .is_some_and(|l| l.bounds() != start_box);
        if changed {
            self.commit();
        }
    }

    // --- Actions --------------------------------------------------------

    /// Step history back, restoring that snapshot's scene and
    /// selection. Returns whether anything happened.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(step) => {
                let layers = step.layers.clone();
                let selected = step.selected;
                self.scene.restore(layers);
                self.selection = selected;
                true
            }
            None => false,
        }
    }

    /// Step history forward. Returns whether anything happened.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(step) => {
                let layers = step.layers.clone();
                let selected = step.selected;
                self.scene.restore(layers);
                self.selection = selected;
                true
            }
            None => false,
        }
    }

    /// Remove the selected layer. Refused while a drag is in progress.
    pub fn delete_selected(&mut self) -> bool {
        if self.interaction != Interaction::Idle {
            return false;
        }
        let Some(id) = self.selection else {
            return false;
        };
        if self.scene.remove(id).is_none() {
            return false;
        }
        self.selection = None;
        self.commit();
        true
    }

    /// Escape: abort any active gesture (restoring the frozen starting
    /// box), clear the selection, and reset the tool to Select.
    pub fn escape(&mut self) {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Moving {
                layer, start_box, ..
            }
            | Interaction::Resizing {
                layer, start_box, ..
            } => {
                self.scene.update(layer, LayerPatch::bounds(start_box));
            }
            _ => {}
        }
        self.selection = None;
        self.tool = ToolKind::Select;
    }

    /// Fold a layer produced by the generative collaborator into the
    /// scene: placed at a fixed inset from the visible origin, selected,
    /// and committed through the normal creation path.
    pub fn insert_generated(&mut self, generated: GeneratedLayer) -> LayerId {
        let origin = self.viewport.to_world(Point::ZERO);
        let inset = GENERATED_LAYER_INSET / self.viewport.zoom;
        let layer = generated.into_layer(origin + Vec2::new(inset, inset));

        let id = self.scene.push(layer);
        self.selection = Some(id);
        self.commit();
        id
    }
}
