//! # Behavior Composition Layer
//!
//! Cross-cutting editor capabilities expressed as an explicit decorator
//! chain instead of runtime method patching.
//!
//! A [`Behavior`] answers two questions the editing core can't answer by
//! itself: which elements are void (atomic to the editing model), and what
//! to do with a paste/drop payload. Each decorator holds its inner behavior
//! by value and delegates every case it doesn't handle, so the chain is
//! fixed at construction and terminates statically — there is no way to
//! accidentally re-enter the outermost override.
//!
//! The default chain is [`WithImages`] over [`ViewBinding`] over
//! [`CoreBehavior`]; order matters only in that the terminator goes
//! innermost, which the types enforce.

use std::path::PathBuf;

use vellum_model::Element;

use crate::editor::EditorState;
use crate::errors::EditorError;
use crate::images;
use crate::session::SessionHandle;
use crate::transforms::Transform;

/// A file carried by a drop/paste payload. Contents are read from `path`
/// when the decode task runs, not when the payload is built.
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    pub path: PathBuf,
}

/// A paste or drop payload: plain text plus any number of files.
#[derive(Debug, Clone, Default)]
pub struct InsertData {
    pub text: String,
    pub files: Vec<DroppedFile>,
}

impl InsertData {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            files: Vec::new(),
        }
    }

    pub fn from_files(files: Vec<DroppedFile>) -> Self {
        Self {
            text: String::new(),
            files,
        }
    }
}

/// The capability interface a session composes over.
pub trait Behavior {
    /// Is `element` atomic to the editing model?
    fn is_void(&self, element: &Element) -> bool;

    /// Turn a paste/drop payload into transforms to apply now. Work that
    /// must happen asynchronously (file decoding) is spawned against
    /// `session` and delivers its transforms later through the session's
    /// completion channel.
    fn insert_data(
        &self,
        state: &EditorState,
        data: &InsertData,
        session: &SessionHandle,
    ) -> Result<Vec<Transform>, EditorError>;
}

/// Chain terminator: nothing is void, payloads insert as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreBehavior;

impl Behavior for CoreBehavior {
    fn is_void(&self, _element: &Element) -> bool {
        false
    }

    fn insert_data(
        &self,
        state: &EditorState,
        data: &InsertData,
        _session: &SessionHandle,
    ) -> Result<Vec<Transform>, EditorError> {
        if data.text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Transform::InsertText {
            at: state.caret().clone(),
            text: data.text.clone(),
        }])
    }
}

/// Marks the editor as bound to a view surface. The binding itself carries
/// no behavior of its own; it is the seam a rendering layer attaches to,
/// and it must sit inside any capability that overrides rendering-adjacent
/// queries so their fallthrough terminates here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewBinding<B> {
    inner: B,
}

impl<B> ViewBinding<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: Behavior> Behavior for ViewBinding<B> {
    fn is_void(&self, element: &Element) -> bool {
        self.inner.is_void(element)
    }

    fn insert_data(
        &self,
        state: &EditorState,
        data: &InsertData,
        session: &SessionHandle,
    ) -> Result<Vec<Transform>, EditorError> {
        self.inner.insert_data(state, data, session)
    }
}

/// Image awareness: images are void, and payloads that look like images
/// become image blocks instead of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithImages<B> {
    inner: B,
}

impl<B> WithImages<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: Behavior> Behavior for WithImages<B> {
    fn is_void(&self, element: &Element) -> bool {
        matches!(element, Element::Image { .. }) || self.inner.is_void(element)
    }

    fn insert_data(
        &self,
        state: &EditorState,
        data: &InsertData,
        session: &SessionHandle,
    ) -> Result<Vec<Transform>, EditorError> {
        if !data.files.is_empty() {
            for file in &data.files {
                if file.media_type.starts_with("image/") {
                    images::spawn_image_decode(session.clone(), file.clone());
                } else {
                    tracing::debug!(
                        file = %file.name,
                        media_type = %file.media_type,
                        "ignoring non-image file in drop payload"
                    );
                }
            }
            return Ok(Vec::new());
        }

        if images::is_image_url(&data.text) {
            return Ok(vec![Transform::InsertNode {
                at: state.insertion_path(),
                element: Element::image(data.text.clone()),
            }]);
        }

        self.inner.insert_data(state, data, session)
    }
}

/// The default capability chain.
pub type DefaultBehavior = WithImages<ViewBinding<CoreBehavior>>;

pub fn default_behavior() -> DefaultBehavior {
    WithImages::new(ViewBinding::new(CoreBehavior))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_model::Node;

    #[test]
    fn test_is_void_true_iff_image() {
        let behavior = default_behavior();
        assert!(behavior.is_void(&Element::image("https://example.com/pic.png")));
        assert!(!behavior.is_void(&Element::paragraph(vec![Node::text("x")])));
        assert!(!behavior.is_void(&Element::code(vec![Node::text("x")])));
    }

    #[test]
    fn test_core_behavior_voids_nothing() {
        assert!(!CoreBehavior.is_void(&Element::image("https://example.com/pic.png")));
    }
}
