//! Editor state: the document plus the selection, with the queries the
//! action layer and behaviors are built on.

use tracing::debug;
use vellum_model::{Document, Element, Path, Point, Selection, Text};

use crate::transforms::{Transform, TransformError};

/// Process-local editing state. Owned by an [`crate::EditSession`]; created
/// when the session starts and discarded with it.
#[derive(Debug, Clone)]
pub struct EditorState {
    document: Document,
    selection: Selection,
}

impl EditorState {
    /// Wrap a document, placing the caret at its first text leaf.
    pub fn new(document: Document) -> Self {
        let selection = document
            .first_text()
            .map(|(path, _)| Selection::caret(Point::start_of(path)))
            .unwrap_or_else(|| Selection::caret(Point::start_of(Path::new(vec![0, 0]))));
        Self {
            document,
            selection,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// The caret: the focus end of the selection.
    pub fn caret(&self) -> &Point {
        self.selection.end()
    }

    /// Index of the top-level block the caret sits in.
    pub fn caret_block_index(&self) -> usize {
        self.caret().path.block_index().unwrap_or(0)
    }

    /// Where a block inserted "at the cursor" lands: directly after the
    /// caret's block, clamped to the end of the document.
    pub fn insertion_path(&self) -> Path {
        Path::block((self.caret_block_index() + 1).min(self.document.len()))
    }

    /// Top-level blocks intersected by the current selection, with their
    /// indices. This is the "block ancestors of the selection" query the
    /// toggle action operates on.
    pub fn blocks_in_selection(&self) -> Vec<(usize, &Element)> {
        let start = self.selection.start().path.block_index().unwrap_or(0);
        let end = self.selection.end().path.block_index().unwrap_or(0);
        (start..=end)
            .filter_map(|i| self.document.block(i).map(|el| (i, el)))
            .collect()
    }

    pub fn text_at(&self, point: &Point) -> Option<&Text> {
        self.document.text_at(&point.path)
    }

    /// Validate and apply a transform, keeping the selection consistent.
    pub fn apply(&mut self, transform: &Transform) -> Result<(), TransformError> {
        debug!(?transform, "applying transform");
        transform.apply(&mut self.document, &mut self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_model::{initial_document, BlockKind, Node};

    #[test]
    fn test_new_places_caret_at_first_leaf() {
        let state = EditorState::new(initial_document());
        assert_eq!(state.caret(), &Point::start_of(Path::new(vec![0, 0])));
        assert!(state.selection().is_collapsed());
    }

    #[test]
    fn test_insertion_path_follows_caret_block() {
        let mut state = EditorState::new(Document::new(vec![
            Element::paragraph(vec![Node::text("one")]),
            Element::paragraph(vec![Node::text("two")]),
        ]));
        assert_eq!(state.insertion_path(), Path::block(1));

        state.set_selection(Selection::caret(Point::start_of(Path::new(vec![1, 0]))));
        assert_eq!(state.insertion_path(), Path::block(2));
    }

    #[test]
    fn test_blocks_in_selection_spans_range() {
        let mut state = EditorState::new(Document::new(vec![
            Element::paragraph(vec![Node::text("one")]),
            Element::code(vec![Node::text("two")]),
            Element::paragraph(vec![Node::text("three")]),
        ]));
        state.set_selection(Selection::new(
            Point::new(Path::new(vec![0, 0]), 1),
            Point::new(Path::new(vec![1, 0]), 2),
        ));

        let blocks = state.blocks_in_selection();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].1.kind(), BlockKind::Paragraph);
        assert_eq!(blocks[1].1.kind(), BlockKind::Code);
    }

    #[test]
    fn test_apply_routes_through_transform() {
        let mut state = EditorState::new(initial_document());
        state
            .apply(&Transform::InsertText {
                at: state.caret().clone(),
                text: "Hi! ".to_string(),
            })
            .unwrap();
        assert_eq!(
            state.document().block(0).unwrap().text_content(),
            "Hi! A line of text in a paragraph."
        );
    }
}
