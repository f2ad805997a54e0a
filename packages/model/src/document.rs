use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::{Element, Node, Text};
use crate::path::Path;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("document has no blocks")]
    EmptyDocument,

    #[error("element at {0} has no children")]
    EmptyElement(Path),

    #[error("no node at {0}")]
    DanglingPath(Path),
}

/// An ordered sequence of top-level block elements.
///
/// The document itself is plain data; the editing engine mutates it through
/// transforms only, never by reaching into the tree directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub children: Vec<Element>,
}

impl Document {
    pub fn new(children: Vec<Element>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Top-level block at `index`.
    pub fn block(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    pub fn block_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    /// Element at `path`, descending through element children.
    pub fn element_at(&self, path: &Path) -> Option<&Element> {
        let (first, rest) = path.indices().split_first()?;
        let mut el = self.children.get(*first)?;
        for &index in rest {
            el = el.children().get(index)?.as_element()?;
        }
        Some(el)
    }

    pub fn element_at_mut(&mut self, path: &Path) -> Option<&mut Element> {
        let (first, rest) = path.indices().split_first()?;
        let mut el = self.children.get_mut(*first)?;
        for &index in rest {
            el = match el.children_mut().get_mut(index)? {
                Node::Element(nested) => nested,
                Node::Text(_) => return None,
            };
        }
        Some(el)
    }

    /// Node at `path`. Paths of length one address top-level elements; use
    /// [`Document::element_at`] for those.
    pub fn node_at(&self, path: &Path) -> Option<&Node> {
        let parent = path.parent()?;
        if parent.is_empty() {
            return None;
        }
        let index = path.leaf_index()?;
        self.element_at(&parent)?.children().get(index)
    }

    /// Text leaf at `path`, if the path lands on one.
    pub fn text_at(&self, path: &Path) -> Option<&Text> {
        self.node_at(path)?.as_text()
    }

    pub fn text_at_mut(&mut self, path: &Path) -> Option<&mut Text> {
        let parent = path.parent()?;
        if parent.is_empty() {
            return None;
        }
        let index = path.leaf_index()?;
        match self.element_at_mut(&parent)?.children_mut().get_mut(index)? {
            Node::Text(leaf) => Some(leaf),
            Node::Element(_) => None,
        }
    }

    /// Check the structural invariants: at least one block, and every
    /// element (at any depth) has at least one child.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.children.is_empty() {
            return Err(ModelError::EmptyDocument);
        }
        for (i, el) in self.children.iter().enumerate() {
            validate_element(el, Path::block(i))?;
        }
        Ok(())
    }

    /// First text leaf in document order, as `(path, leaf)`.
    pub fn first_text(&self) -> Option<(Path, &Text)> {
        for (i, el) in self.children.iter().enumerate() {
            if let Some(found) = first_text_in(el, Path::block(i)) {
                return Some(found);
            }
        }
        None
    }

    /// First text leaf inside the top-level block at `index`.
    pub fn first_text_in_block(&self, index: usize) -> Option<(Path, &Text)> {
        first_text_in(self.block(index)?, Path::block(index))
    }
}

fn validate_element(el: &Element, at: Path) -> Result<(), ModelError> {
    if el.children().is_empty() {
        return Err(ModelError::EmptyElement(at));
    }
    for (i, child) in el.children().iter().enumerate() {
        if let Node::Element(nested) = child {
            validate_element(nested, at.child(i))?;
        }
    }
    Ok(())
}

fn first_text_in<'a>(el: &'a Element, at: Path) -> Option<(Path, &'a Text)> {
    for (i, child) in el.children().iter().enumerate() {
        match child {
            Node::Text(leaf) => return Some((at.child(i), leaf)),
            Node::Element(nested) => {
                if let Some(found) = first_text_in(nested, at.child(i)) {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// The demo's starting document: a single paragraph of text.
pub fn initial_document() -> Document {
    Document::new(vec![Element::paragraph(vec![Node::text(
        "A line of text in a paragraph.",
    )])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_document_shape() {
        let doc = initial_document();
        assert_eq!(doc.len(), 1);
        assert!(doc.validate().is_ok());
        assert_eq!(
            doc.block(0).unwrap().text_content(),
            "A line of text in a paragraph."
        );
    }

    #[test]
    fn test_node_and_text_lookup() {
        let doc = initial_document();
        let leaf_path = Path::new(vec![0, 0]);
        let leaf = doc.text_at(&leaf_path).unwrap();
        assert_eq!(leaf.text, "A line of text in a paragraph.");

        assert!(doc.text_at(&Path::new(vec![0, 1])).is_none());
        assert!(doc.text_at(&Path::new(vec![3, 0])).is_none());
        assert!(doc.element_at(&Path::block(0)).is_some());
        assert!(doc.element_at(&Path::block(1)).is_none());
    }

    #[test]
    fn test_validate_rejects_empty_children() {
        let doc = Document::new(vec![Element::Paragraph { children: vec![] }]);
        assert_eq!(
            doc.validate(),
            Err(ModelError::EmptyElement(Path::block(0)))
        );

        assert_eq!(Document::default().validate(), Err(ModelError::EmptyDocument));
    }

    #[test]
    fn test_first_text() {
        let doc = Document::new(vec![
            Element::image("https://example.com/a.png"),
            Element::paragraph(vec![Node::text("hello")]),
        ]);
        let (path, leaf) = doc.first_text().unwrap();
        // The image's empty leaf comes first in document order.
        assert_eq!(path, Path::new(vec![0, 0]));
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_document_json_is_a_node_array() {
        let doc = initial_document();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.is_array());
        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
