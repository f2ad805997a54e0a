use serde::{Deserialize, Serialize};

/// Text leaf node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The empty leaf every void element carries as its only child.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Length in characters (offsets are character-based, not byte-based).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Discriminant-only view of an element, used by retype transforms and the
/// render dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Code,
    Image,
}

/// Block element node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Default text container
    Paragraph { children: Vec<Node> },

    /// Preformatted code container
    Code { children: Vec<Node> },

    /// Void image block. The single empty text child satisfies the
    /// non-empty-children invariant; it is never user-editable.
    Image { url: String, children: Vec<Node> },
}

/// A node in the document tree: a block element or a text leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Element {
    /// Paragraph with the given children; an empty list gets one empty leaf.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Element::Paragraph {
            children: non_empty(children),
        }
    }

    /// Code block with the given children; an empty list gets one empty leaf.
    pub fn code(children: Vec<Node>) -> Self {
        Element::Code {
            children: non_empty(children),
        }
    }

    /// Image block pointing at `url`.
    pub fn image(url: impl Into<String>) -> Self {
        Element::Image {
            url: url.into(),
            children: vec![Node::Text(Text::empty())],
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Element::Paragraph { .. } => BlockKind::Paragraph,
            Element::Code { .. } => BlockKind::Code,
            Element::Image { .. } => BlockKind::Image,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Element::Paragraph { children }
            | Element::Code { children }
            | Element::Image { children, .. } => children,
        }
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        match self {
            Element::Paragraph { children }
            | Element::Code { children }
            | Element::Image { children, .. } => children,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Element::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Concatenated text of all descendant leaves.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            match child {
                Node::Text(leaf) => out.push_str(&leaf.text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(leaf) => Some(leaf),
            Node::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

fn non_empty(mut children: Vec<Node>) -> Vec<Node> {
    if children.is_empty() {
        children.push(Node::Text(Text::empty()));
    }
    children
}
