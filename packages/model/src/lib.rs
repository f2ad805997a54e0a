//! # Vellum Model
//!
//! The document tree for the Vellum block editor.
//!
//! A document is an ordered sequence of block elements. Each element is one
//! of a closed set of variants (paragraph, code, image) and owns a non-empty
//! list of child nodes; text lives in leaf nodes. Positions in the tree are
//! addressed by [`Path`] (child indices from the root) and positions in text
//! by [`Point`] (a path plus a character offset).
//!
//! The model is inert data: all mutation goes through the transform
//! operations in `vellum-editor`, which keep the document and the selection
//! consistent with each other.

mod document;
mod node;
mod path;
mod point;

pub use document::{initial_document, Document, ModelError};
pub use node::{BlockKind, Element, Node, Text};
pub use path::Path;
pub use point::{Point, Selection};
