//! # Undo/Redo Stack
//!
//! Tracks transform history and enables undo/redo.
//!
//! ## Design
//!
//! - Each transform's inverse is computed against the document *before* the
//!   transform applies, and both are recorded together
//! - Undo applies the inverse and moves the entry to the redo stack
//! - Redo reapplies the original transform
//! - New transforms clear the redo stack

use crate::editor::EditorState;
use crate::transforms::{Transform, TransformError};

/// A recorded transform and its pre-computed inverse.
#[derive(Debug, Clone)]
struct HistoryEntry {
    transform: Transform,
    inverse: Transform,
}

/// Undo/redo stack for an edit session.
#[derive(Debug)]
pub struct UndoStack {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Default max levels (100).
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record an already-applied transform with its inverse.
    pub fn push(&mut self, transform: Transform, inverse: Transform) {
        self.undo_stack.push(HistoryEntry { transform, inverse });

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // A new edit invalidates the redone future.
        self.redo_stack.clear();
    }

    /// Undo the most recent transform. Returns false if there was nothing
    /// to undo.
    pub fn undo(&mut self, state: &mut EditorState) -> Result<bool, TransformError> {
        match self.undo_stack.pop() {
            Some(entry) => {
                state.apply(&entry.inverse)?;
                self.redo_stack.push(entry);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reapply the most recently undone transform.
    pub fn redo(&mut self, state: &mut EditorState) -> Result<bool, TransformError> {
        match self.redo_stack.pop() {
            Some(entry) => {
                state.apply(&entry.transform)?;
                self.undo_stack.push(entry);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_model::{initial_document, Path, Point};

    fn record(stack: &mut UndoStack, state: &mut EditorState, transform: Transform) {
        let inverse = transform.inverse(state.document()).unwrap();
        state.apply(&transform).unwrap();
        stack.push(transform, inverse);
    }

    fn insert_at_start(text: &str) -> Transform {
        Transform::InsertText {
            at: Point::start_of(Path::new(vec![0, 0])),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_stack() {
        let stack = UndoStack::new();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_undo_then_redo_round_trips() {
        let mut state = EditorState::new(initial_document());
        let mut stack = UndoStack::new();
        let original = state.document().clone();

        record(&mut stack, &mut state, insert_at_start("Hello "));
        let edited = state.document().clone();
        assert_ne!(edited, original);

        assert!(stack.undo(&mut state).unwrap());
        assert_eq!(state.document(), &original);
        assert!(stack.can_redo());

        assert!(stack.redo(&mut state).unwrap());
        assert_eq!(state.document(), &edited);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut state = EditorState::new(initial_document());
        let mut stack = UndoStack::new();

        record(&mut stack, &mut state, insert_at_start("a"));
        stack.undo(&mut state).unwrap();
        assert_eq!(stack.redo_levels(), 1);

        record(&mut stack, &mut state, insert_at_start("b"));
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut state = EditorState::new(initial_document());
        let mut stack = UndoStack::with_max_levels(2);

        for text in ["a", "b", "c"] {
            record(&mut stack, &mut state, insert_at_start(text));
        }
        assert_eq!(stack.undo_levels(), 2);
    }
}
