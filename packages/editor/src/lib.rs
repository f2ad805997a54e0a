//! # Vellum Editor
//!
//! Core editing engine for Vellum.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: typed node tree + paths/selections   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + transforms      │
//! │  - Apply transforms with validation         │
//! │  - Behavior decorators (void, insert-data)  │
//! │  - Async image decode → completion channel  │
//! │  - Undo/redo over recorded inverses         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: tree → presentation variants      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is the source of truth**: rendered output is a derived view
//! 2. **Transforms are the only mutation path**: validated, invertible,
//!    selection-consistent
//! 3. **Capabilities compose explicitly**: decorators nest in a fixed order
//!    and delegate inward, never back out
//! 4. **Async work never holds the document**: decode tasks hand results to
//!    the session, which applies them on its own thread
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vellum_editor::{actions, keymap, EditSession, KeyEvent};
//! use vellum_model::initial_document;
//!
//! let mut session = EditSession::new(initial_document());
//!
//! // Toolbar
//! actions::insert_demo_text(&mut session)?;
//! let at = actions::insert_image(&mut session, None)?;
//!
//! // Keyboard
//! keymap::handle_key_event(&mut session, &KeyEvent::ctrl('r'))?;
//!
//! // Paste/drop
//! session.insert_data(&InsertData::from_text("https://example.com/pic.png"))?;
//!
//! // Async image decodes land through the completion channel
//! session.drain_completions()?;
//! ```

pub mod actions;
mod behavior;
mod editor;
mod errors;
pub mod images;
pub mod keymap;
mod session;
mod transforms;
mod undo;

pub use behavior::{
    default_behavior, Behavior, CoreBehavior, DefaultBehavior, DroppedFile, InsertData,
    ViewBinding, WithImages,
};
pub use editor::EditorState;
pub use errors::EditorError;
pub use images::{data_url, is_image_url, spawn_image_decode, IMAGE_EXTENSIONS};
pub use keymap::{handle_key_event, Key, KeyDisposition, KeyEvent};
pub use session::{Completion, EditSession, SessionHandle};
pub use transforms::{Transform, TransformError};
pub use undo::UndoStack;

// Re-export common model types for convenience
pub use vellum_model::{BlockKind, Document, Element, Node, Path, Point, Selection};
