use serde::{Deserialize, Serialize};
use vellum_model::{Document, Element, Node, Path};

/// What the view needs to know about the session to render it: which block
/// the selection targets, and whether the view has focus.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub selected_block: Option<Path>,
    pub focused: bool,
}

impl RenderContext {
    pub fn new(selected_block: Option<Path>, focused: bool) -> Self {
        Self {
            selected_block,
            focused,
        }
    }

    fn is_selected(&self, at: &Path) -> bool {
        self.selected_block.as_ref() == Some(at)
    }
}

/// Presentation variant for one block element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum RenderedElement {
    /// Preformatted code container
    Code { children: Vec<RenderedChild> },

    /// Void image block. `show_delete` is true only when this block is the
    /// selection target and the view has focus.
    Image {
        url: String,
        selected: bool,
        show_delete: bool,
    },

    /// Default paragraph container
    Paragraph { children: Vec<RenderedChild> },
}

/// Rendered child content: text runs and nested elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderedChild {
    Text(String),
    Element(RenderedElement),
}

/// Dispatch one element to its presentation variant. Total over the element
/// union; there is no default arm to fall through to.
pub fn render_element(element: &Element, at: &Path, ctx: &RenderContext) -> RenderedElement {
    match element {
        Element::Code { children } => RenderedElement::Code {
            children: render_children(children, at, ctx),
        },
        Element::Image { url, .. } => {
            let selected = ctx.is_selected(at);
            RenderedElement::Image {
                url: url.clone(),
                selected,
                show_delete: selected && ctx.focused,
            }
        }
        Element::Paragraph { children } => RenderedElement::Paragraph {
            children: render_children(children, at, ctx),
        },
    }
}

/// Dispatch every top-level block of a document.
pub fn render_document(document: &Document, ctx: &RenderContext) -> Vec<RenderedElement> {
    document
        .children
        .iter()
        .enumerate()
        .map(|(i, el)| render_element(el, &Path::block(i), ctx))
        .collect()
}

fn render_children(children: &[Node], at: &Path, ctx: &RenderContext) -> Vec<RenderedChild> {
    children
        .iter()
        .enumerate()
        .map(|(i, child)| match child {
            Node::Text(leaf) => RenderedChild::Text(leaf.text.clone()),
            Node::Element(el) => RenderedChild::Element(render_element(el, &at.child(i), ctx)),
        })
        .collect()
}
