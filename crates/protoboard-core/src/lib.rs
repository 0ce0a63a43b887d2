//! Protoboard Core Library
//!
//! Platform-agnostic scene state and pointer-interaction logic for the
//! Protoboard design editor: the viewport transform, the scene store,
//! hit-testing, the gesture state machine, and undo/redo history.

pub mod collaboration;
pub mod editor;
pub mod generative;
pub mod handles;
pub mod history;
pub mod input;
pub mod layer;
pub mod scene;
pub mod style;
pub mod tools;
pub mod viewport;

pub use collaboration::Collaborator;
pub use editor::{Editor, EditorAction, EditorMode, Interaction};
pub use generative::{GenerateError, GeneratedLayer};
pub use handles::HandleCorner;
pub use history::{History, HistoryStep};
pub use input::{Modifiers, MouseButton};
pub use layer::{Layer, LayerId, LayerKind, PrototypeLink};
pub use scene::{LayerPatch, Scene};
pub use style::{Color, LayerStyle};
pub use tools::ToolKind;
pub use viewport::Viewport;
