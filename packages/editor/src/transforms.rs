//! # Document Transforms
//!
//! Semantic operations on the document tree.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each transform represents one semantic operation
//! 2. **Validated**: Structural constraints are checked before anything mutates
//! 3. **Selection-consistent**: Applying a transform moves the selection the
//!    way an editor user would expect (caret past inserted content, clamped
//!    off removed content)
//! 4. **Invertible**: Every transform can produce its inverse against the
//!    current document, which is what the undo stack records
//!
//! ## Transform Semantics
//!
//! ### InsertText / RemoveText
//! - Character-offset splice into a single text leaf
//! - Points in the same leaf shift with the edit
//!
//! ### SetBlockKind
//! - Retypes a block in place, keeping its children
//! - Only paragraph ⇄ code is legal; images carry a url and are never retyped
//!
//! ### InsertNode / RemoveNode
//! - Address top-level blocks only
//! - RemoveNode of the last block leaves one empty paragraph behind so the
//!   document never becomes empty

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vellum_model::{BlockKind, Document, Element, Node, Path, Point, Selection, Text};

/// Semantic operations on a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// Splice text into the leaf at `at`
    InsertText { at: Point, text: String },

    /// Remove `len` characters starting at `at`
    RemoveText { at: Point, len: usize },

    /// Retype the block at `at`, keeping its children
    SetBlockKind { at: Path, kind: BlockKind },

    /// Insert a top-level block at `at`
    InsertNode { at: Path, element: Element },

    /// Remove the top-level block at `at`
    RemoveNode { at: Path },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("no node at {0}")]
    PathNotFound(Path),

    #[error("node at {0} is not a text leaf")]
    NotText(Path),

    #[error("offset {offset} is past the end of the leaf (len {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("cannot retype block at {0} to or from an image")]
    InvalidRetype(Path),

    #[error("node transforms address top-level blocks; {0} does not")]
    NotTopLevel(Path),
}

impl Transform {
    /// Validate against `document` without applying.
    pub fn validate(&self, document: &Document) -> Result<(), TransformError> {
        match self {
            Transform::InsertText { at, .. } => {
                let leaf = lookup_text(document, &at.path)?;
                check_offset(at.offset, leaf.len())
            }

            Transform::RemoveText { at, len } => {
                let leaf = lookup_text(document, &at.path)?;
                check_offset(at.offset + len, leaf.len())
            }

            Transform::SetBlockKind { at, kind } => {
                let el = top_level(document, at)?;
                if el.kind() == BlockKind::Image || *kind == BlockKind::Image {
                    return Err(TransformError::InvalidRetype(at.clone()));
                }
                Ok(())
            }

            Transform::InsertNode { at, .. } => {
                let index = block_index(at)?;
                if index > document.len() {
                    return Err(TransformError::PathNotFound(at.clone()));
                }
                Ok(())
            }

            Transform::RemoveNode { at } => {
                top_level(document, at)?;
                Ok(())
            }
        }
    }

    /// Apply to `document`, keeping `selection` consistent. Validates first;
    /// on error nothing is mutated.
    pub fn apply(
        &self,
        document: &mut Document,
        selection: &mut Selection,
    ) -> Result<(), TransformError> {
        self.validate(document)?;

        match self {
            Transform::InsertText { at, text } => {
                apply_insert_text(document, selection, at, text)
            }
            Transform::RemoveText { at, len } => {
                apply_remove_text(document, selection, at, *len)
            }
            Transform::SetBlockKind { at, kind } => apply_set_block_kind(document, at, *kind),
            Transform::InsertNode { at, element } => {
                apply_insert_node(document, selection, at, element)
            }
            Transform::RemoveNode { at } => apply_remove_node(document, selection, at),
        }
    }

    /// The transform that undoes this one, computed against the document as
    /// it stands *before* this transform is applied.
    pub fn inverse(&self, document: &Document) -> Result<Transform, TransformError> {
        match self {
            Transform::InsertText { at, text } => Ok(Transform::RemoveText {
                at: at.clone(),
                len: text.chars().count(),
            }),

            Transform::RemoveText { at, len } => {
                let leaf = lookup_text(document, &at.path)?;
                check_offset(at.offset + len, leaf.len())?;
                let removed: String = leaf
                    .text
                    .chars()
                    .skip(at.offset)
                    .take(*len)
                    .collect();
                Ok(Transform::InsertText {
                    at: at.clone(),
                    text: removed,
                })
            }

            Transform::SetBlockKind { at, .. } => {
                let el = top_level(document, at)?;
                Ok(Transform::SetBlockKind {
                    at: at.clone(),
                    kind: el.kind(),
                })
            }

            Transform::InsertNode { at, .. } => Ok(Transform::RemoveNode { at: at.clone() }),

            Transform::RemoveNode { at } => {
                let el = top_level(document, at)?;
                Ok(Transform::InsertNode {
                    at: at.clone(),
                    element: el.clone(),
                })
            }
        }
    }
}

fn apply_insert_text(
    document: &mut Document,
    selection: &mut Selection,
    at: &Point,
    text: &str,
) -> Result<(), TransformError> {
    let leaf = document
        .text_at_mut(&at.path)
        .ok_or_else(|| TransformError::NotText(at.path.clone()))?;

    let byte = byte_index(&leaf.text, at.offset);
    leaf.text.insert_str(byte, text);

    let inserted = text.chars().count();
    for point in [&mut selection.anchor, &mut selection.focus] {
        if point.path == at.path && point.offset >= at.offset {
            point.offset += inserted;
        }
    }
    Ok(())
}

fn apply_remove_text(
    document: &mut Document,
    selection: &mut Selection,
    at: &Point,
    len: usize,
) -> Result<(), TransformError> {
    let leaf = document
        .text_at_mut(&at.path)
        .ok_or_else(|| TransformError::NotText(at.path.clone()))?;

    let start = byte_index(&leaf.text, at.offset);
    let end = byte_index(&leaf.text, at.offset + len);
    leaf.text.replace_range(start..end, "");

    for point in [&mut selection.anchor, &mut selection.focus] {
        if point.path == at.path && point.offset > at.offset {
            point.offset = at.offset + point.offset.saturating_sub(at.offset + len);
        }
    }
    Ok(())
}

fn apply_set_block_kind(
    document: &mut Document,
    at: &Path,
    kind: BlockKind,
) -> Result<(), TransformError> {
    let index = block_index(at)?;
    let el = document
        .block_mut(index)
        .ok_or_else(|| TransformError::PathNotFound(at.clone()))?;

    if el.kind() == kind {
        return Ok(());
    }

    let children = std::mem::take(el.children_mut());
    *el = match kind {
        BlockKind::Paragraph => Element::Paragraph { children },
        BlockKind::Code => Element::Code { children },
        // Rejected by validate
        BlockKind::Image => return Err(TransformError::InvalidRetype(at.clone())),
    };
    Ok(())
}

fn apply_insert_node(
    document: &mut Document,
    selection: &mut Selection,
    at: &Path,
    element: &Element,
) -> Result<(), TransformError> {
    let index = block_index(at)?;
    document.children.insert(index, element.clone());

    // The caret lands past the inserted block: at the start of the block
    // that now follows it, or inside the inserted block when it is last.
    let caret_block = if index + 1 < document.len() {
        index + 1
    } else {
        index
    };
    if let Some((path, _)) = document.first_text_in_block(caret_block) {
        *selection = Selection::caret(Point::start_of(path));
    }
    Ok(())
}

fn apply_remove_node(
    document: &mut Document,
    selection: &mut Selection,
    at: &Path,
) -> Result<(), TransformError> {
    let index = block_index(at)?;
    if index >= document.len() {
        return Err(TransformError::PathNotFound(at.clone()));
    }
    document.children.remove(index);

    // The document never goes empty; removing the last block leaves an
    // empty paragraph behind, the same normalization editors apply.
    if document.is_empty() {
        document.children.push(Element::paragraph(vec![]));
    }

    let clamp_block = index.min(document.len() - 1);
    let clamp = document
        .first_text_in_block(clamp_block)
        .or_else(|| document.first_text())
        .map(|(path, _)| Point::start_of(path));

    for point in [&mut selection.anchor, &mut selection.focus] {
        match point.path.block_index() {
            Some(b) if b == index => {
                if let Some(p) = &clamp {
                    *point = p.clone();
                }
            }
            Some(b) if b > index => point.path.set_block_index(b - 1),
            _ => {}
        }
    }
    Ok(())
}

fn lookup_text<'a>(document: &'a Document, path: &Path) -> Result<&'a Text, TransformError> {
    match document.node_at(path) {
        Some(Node::Text(leaf)) => Ok(leaf),
        Some(Node::Element(_)) => Err(TransformError::NotText(path.clone())),
        None => Err(TransformError::PathNotFound(path.clone())),
    }
}

fn top_level<'a>(document: &'a Document, path: &Path) -> Result<&'a Element, TransformError> {
    let index = block_index(path)?;
    document
        .block(index)
        .ok_or_else(|| TransformError::PathNotFound(path.clone()))
}

fn block_index(path: &Path) -> Result<usize, TransformError> {
    match path.block_index() {
        Some(index) if path.len() == 1 => Ok(index),
        _ => Err(TransformError::NotTopLevel(path.clone())),
    }
}

fn check_offset(offset: usize, len: usize) -> Result<(), TransformError> {
    if offset > len {
        Err(TransformError::OffsetOutOfBounds { offset, len })
    } else {
        Ok(())
    }
}

/// Byte index of the character at `char_offset`, or the end of the string.
fn byte_index(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
