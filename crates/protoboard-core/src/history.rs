//! Undo/redo history as a cursor-indexed snapshot stack.

use crate::layer::{Layer, LayerId};

/// Maximum number of history steps to keep.
pub const MAX_HISTORY: usize = 50;

/// One committed (scene, selection) snapshot.
#[derive(Debug, Clone)]
pub struct HistoryStep {
    /// Full ordered layer collection at the time of the commit.
    pub layers: Vec<Layer>,
    /// The then-selected layer, if any.
    pub selected: Option<LayerId>,
}

/// Linear undo history.
///
/// Holds full snapshots rather than diffs; scenes are small and the
/// [`MAX_HISTORY`] cap bounds memory. Recording while the cursor sits
/// in the middle of the stack discards every later step.
#[derive(Debug, Default)]
pub struct History {
    steps: Vec<HistoryStep>,
    /// Index of the current step; `None` while the stack is empty.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the current step, if any.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.steps.len())
    }

    /// Commit a new step: truncate everything past the cursor, append,
    /// and evict the oldest entry once the stack exceeds the cap.
    pub fn record(&mut self, layers: Vec<Layer>, selected: Option<LayerId>) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.steps.truncate(keep);
        self.steps.push(HistoryStep { layers, selected });

        if self.steps.len() > MAX_HISTORY {
            log::trace!("history full, evicting oldest step");
            self.steps.remove(0);
        }
        self.cursor = Some(self.steps.len() - 1);
    }

    /// Step back and return the snapshot to restore. A no-op at the
    /// oldest step or on an empty stack.
    pub fn undo(&mut self) -> Option<&HistoryStep> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.steps.get(cursor - 1)
    }

    /// Step forward and return the snapshot to restore. A no-op at the
    /// newest step.
    pub fn redo(&mut self) -> Option<&HistoryStep> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.steps.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.steps.get(cursor + 1)
    }

    /// The step the cursor points at, if any.
    pub fn current(&self) -> Option<&HistoryStep> {
        self.steps.get(self.cursor?)
    }
}
