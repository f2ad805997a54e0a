//! # Edit Session
//!
//! The explicitly owned editing handle: one per open document view.
//!
//! A session owns the editor state, the behavior chain, the undo history,
//! and the completion channel asynchronous work reports back through. It is
//! constructed when the view mounts and dropped when the view unmounts;
//! dropping it closes the completion channel, so decode tasks that finish
//! late find no session to mutate and their results are discarded.
//!
//! All mutation happens on the caller's thread through [`EditSession::apply`]
//! and [`EditSession::drain_completions`]; the async tasks never touch the
//! document directly.

use tokio::sync::mpsc;
use tracing::debug;
use vellum_model::{Document, Element, Path, Selection};

use crate::behavior::{default_behavior, Behavior, DefaultBehavior, InsertData};
use crate::editor::EditorState;
use crate::errors::EditorError;
use crate::transforms::Transform;
use crate::undo::UndoStack;

/// Result of an asynchronous task, delivered through the session channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A dropped file finished decoding to a `data:` URL.
    InsertImage { url: String },
}

/// Cloneable sender half handed to async tasks.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Completion>,
}

impl SessionHandle {
    /// Deliver a completion. Returns false if the session is gone.
    pub fn complete(&self, completion: Completion) -> bool {
        self.tx.send(completion).is_ok()
    }
}

/// A single editing session over one document.
pub struct EditSession<B: Behavior = DefaultBehavior> {
    state: EditorState,
    behavior: B,
    history: UndoStack,
    focused: bool,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl EditSession<DefaultBehavior> {
    /// Open a session with the default capability chain.
    pub fn new(document: Document) -> Self {
        Self::with_behavior(document, default_behavior())
    }
}

impl<B: Behavior> EditSession<B> {
    pub fn with_behavior(document: Document, behavior: B) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: EditorState::new(document),
            behavior,
            history: UndoStack::new(),
            focused: false,
            tx,
            rx,
        }
    }

    /// Handle for async tasks to report completions through.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            tx: self.tx.clone(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        self.state.document()
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.state.set_selection(selection);
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Ask the behavior chain whether `element` is void.
    pub fn is_void(&self, element: &Element) -> bool {
        self.behavior.is_void(element)
    }

    /// Apply a transform and record it for undo.
    pub fn apply(&mut self, transform: Transform) -> Result<(), EditorError> {
        let inverse = transform.inverse(self.state.document())?;
        self.state.apply(&transform)?;
        self.history.push(transform, inverse);
        Ok(())
    }

    /// Route a paste/drop payload through the behavior chain. Synchronous
    /// effects apply immediately; file decodes arrive later as completions.
    pub fn insert_data(&mut self, data: &InsertData) -> Result<(), EditorError> {
        let handle = self.handle();
        let transforms = self.behavior.insert_data(&self.state, data, &handle)?;
        for transform in transforms {
            self.apply(transform)?;
        }
        Ok(())
    }

    /// Apply every completion queued so far. Returns how many were applied.
    pub fn drain_completions(&mut self) -> Result<usize, EditorError> {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            self.apply_completion(completion)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Wait for one completion and apply it. Used where the caller wants to
    /// observe async insertions deterministically.
    pub async fn pump_completion(&mut self) -> Result<(), EditorError> {
        if let Some(completion) = self.rx.recv().await {
            self.apply_completion(completion)?;
        }
        Ok(())
    }

    fn apply_completion(&mut self, completion: Completion) -> Result<(), EditorError> {
        match completion {
            Completion::InsertImage { url } => {
                let at = self.state.insertion_path();
                debug!(%at, "inserting decoded image");
                self.apply(Transform::InsertNode {
                    at,
                    element: Element::image(url),
                })
            }
        }
    }

    /// Undo the most recent transform. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        self.history.undo(&mut self.state).map_err(EditorError::from)
    }

    /// Reapply the most recently undone transform.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        self.history.redo(&mut self.state).map_err(EditorError::from)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Path of the last image block in the document, if any. The demo's
    /// delete affordance tracks its target this way.
    pub fn last_image_path(&self) -> Option<Path> {
        self.document()
            .children
            .iter()
            .rposition(|el| matches!(el, Element::Image { .. }))
            .map(Path::block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_model::initial_document;

    #[test]
    fn test_session_lifecycle() {
        let session = EditSession::new(initial_document());
        assert!(!session.is_focused());
        assert!(!session.can_undo());
        assert!(session.selection().is_collapsed());
    }

    #[test]
    fn test_completion_send_fails_after_drop() {
        let session = EditSession::new(initial_document());
        let handle = session.handle();
        drop(session);

        assert!(!handle.complete(Completion::InsertImage {
            url: "data:image/png;base64,AAAA".to_string(),
        }));
    }

    #[test]
    fn test_drain_applies_queued_completions() {
        let mut session = EditSession::new(initial_document());
        let handle = session.handle();

        assert!(handle.complete(Completion::InsertImage {
            url: "data:image/png;base64,AAAA".to_string(),
        }));
        assert!(handle.complete(Completion::InsertImage {
            url: "data:image/gif;base64,BBBB".to_string(),
        }));

        let applied = session.drain_completions().unwrap();
        assert_eq!(applied, 2);
        assert_eq!(session.document().len(), 3);
    }

    #[test]
    fn test_last_image_path() {
        let mut session = EditSession::new(initial_document());
        assert_eq!(session.last_image_path(), None);

        session
            .apply(Transform::InsertNode {
                at: Path::block(1),
                element: Element::image("https://example.com/pic.png"),
            })
            .unwrap();
        assert_eq!(session.last_image_path(), Some(Path::block(1)));
    }
}
