//! # Vellum Renderer
//!
//! Turns the document tree into presentation output.
//!
//! Two layers: the dispatcher maps each block element onto exactly one
//! presentation variant (code block, image block, paragraph), and the HTML
//! compiler serializes dispatched variants into markup. The dispatch is an
//! exhaustive match over the element union — adding a node type without
//! deciding how it renders is a compile error, not a silent fallthrough.

mod dispatcher;
mod html;

pub use dispatcher::{render_document, render_element, RenderContext, RenderedChild, RenderedElement};
pub use html::{compile_document, CompileOptions};
