//! Toolbar actions: the operations the demo's controls invoke.

use vellum_model::{BlockKind, Element, Path};

use crate::behavior::Behavior;
use crate::errors::EditorError;
use crate::images::is_image_url;
use crate::session::EditSession;
use crate::transforms::Transform;

/// Placeholder inserted by the toolbar's image button when no URL is given.
/// Deliberately unvalidated, like the rest of the demo toolbar.
pub const DEMO_IMAGE_URL: &str = "https://source.unsplash.com/kFrdX5IeQzI";

/// Insert the demo text at the caret.
pub fn insert_demo_text<B: Behavior>(session: &mut EditSession<B>) -> Result<(), EditorError> {
    let at = session.state().caret().clone();
    session.apply(Transform::InsertText {
        at,
        text: "asdf\n".to_string(),
    })
}

/// Toggle the selected blocks between code and paragraph.
///
/// If any block intersecting the selection is already a code block, every
/// retypeable block in the selection becomes a paragraph; otherwise they all
/// become code blocks. Image blocks are skipped. Calling this twice on an
/// unchanged selection restores the original kinds.
pub fn toggle_code_block<B: Behavior>(session: &mut EditSession<B>) -> Result<(), EditorError> {
    let matched: Vec<(usize, BlockKind)> = session
        .state()
        .blocks_in_selection()
        .into_iter()
        .map(|(i, el)| (i, el.kind()))
        .collect();

    let has_code = matched.iter().any(|(_, kind)| *kind == BlockKind::Code);
    let target = if has_code {
        BlockKind::Paragraph
    } else {
        BlockKind::Code
    };

    for (index, kind) in matched {
        if kind == BlockKind::Image || kind == target {
            continue;
        }
        session.apply(Transform::SetBlockKind {
            at: Path::block(index),
            kind: target,
        })?;
    }
    Ok(())
}

/// Insert an image block after the caret's block.
///
/// With `None` the hardcoded demo URL goes in as-is. An explicit URL is
/// validated first and rejected when it doesn't look like an image.
/// Returns the path of the inserted block.
pub fn insert_image<B: Behavior>(
    session: &mut EditSession<B>,
    url: Option<&str>,
) -> Result<Path, EditorError> {
    let url = match url {
        None => DEMO_IMAGE_URL.to_string(),
        Some(u) if is_image_url(u) => u.to_string(),
        Some(u) => return Err(EditorError::NotAnImageUrl(u.to_string())),
    };

    let at = session.state().insertion_path();
    session.apply(Transform::InsertNode {
        at: at.clone(),
        element: Element::image(url),
    })?;
    Ok(at)
}

/// Remove the image block at `at`. Errors if the path doesn't hold an image.
pub fn delete_image<B: Behavior>(
    session: &mut EditSession<B>,
    at: &Path,
) -> Result<(), EditorError> {
    match session.document().element_at(at) {
        Some(el) if el.kind() == BlockKind::Image => {
            session.apply(Transform::RemoveNode { at: at.clone() })
        }
        _ => Err(EditorError::NotAnImage(at.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_model::{initial_document, Document, Node, Point, Selection};

    #[test]
    fn test_insert_demo_text_at_caret() {
        let mut session = EditSession::new(initial_document());
        insert_demo_text(&mut session).unwrap();

        assert_eq!(session.document().len(), 1);
        assert_eq!(
            session.document().block(0).unwrap().text_content(),
            "asdf\nA line of text in a paragraph."
        );
    }

    #[test]
    fn test_insert_demo_text_at_moved_caret() {
        let mut session = EditSession::new(initial_document());
        session.set_selection(Selection::caret(Point::new(Path::new(vec![0, 0]), 6)));
        insert_demo_text(&mut session).unwrap();

        assert_eq!(
            session.document().block(0).unwrap().text_content(),
            "A lineasdf\n of text in a paragraph."
        );
    }

    #[test]
    fn test_toggle_round_trips() {
        let mut session = EditSession::new(initial_document());

        toggle_code_block(&mut session).unwrap();
        assert_eq!(session.document().block(0).unwrap().kind(), BlockKind::Code);

        toggle_code_block(&mut session).unwrap();
        assert_eq!(
            session.document().block(0).unwrap().kind(),
            BlockKind::Paragraph
        );
    }

    #[test]
    fn test_toggle_with_mixed_selection() {
        let mut session = EditSession::new(Document::new(vec![
            Element::paragraph(vec![Node::text("one")]),
            Element::code(vec![Node::text("two")]),
        ]));
        session.set_selection(Selection::new(
            Point::start_of(Path::new(vec![0, 0])),
            Point::start_of(Path::new(vec![1, 0])),
        ));

        // One code block in the selection: everything becomes a paragraph.
        toggle_code_block(&mut session).unwrap();
        assert_eq!(
            session.document().block(0).unwrap().kind(),
            BlockKind::Paragraph
        );
        assert_eq!(
            session.document().block(1).unwrap().kind(),
            BlockKind::Paragraph
        );

        // None left: everything becomes code.
        toggle_code_block(&mut session).unwrap();
        assert_eq!(session.document().block(0).unwrap().kind(), BlockKind::Code);
        assert_eq!(session.document().block(1).unwrap().kind(), BlockKind::Code);
    }

    #[test]
    fn test_toggle_skips_images() {
        let mut session = EditSession::new(Document::new(vec![
            Element::paragraph(vec![Node::text("one")]),
            Element::image("https://example.com/pic.png"),
        ]));
        session.set_selection(Selection::new(
            Point::start_of(Path::new(vec![0, 0])),
            Point::start_of(Path::new(vec![1, 0])),
        ));

        toggle_code_block(&mut session).unwrap();
        assert_eq!(session.document().block(0).unwrap().kind(), BlockKind::Code);
        assert_eq!(
            session.document().block(1).unwrap().kind(),
            BlockKind::Image
        );
    }

    #[test]
    fn test_insert_image_defaults_to_demo_url() {
        let mut session = EditSession::new(initial_document());
        let at = insert_image(&mut session, None).unwrap();

        assert_eq!(at, Path::block(1));
        assert_eq!(
            session.document().block(1).unwrap().url(),
            Some(DEMO_IMAGE_URL)
        );
    }

    #[test]
    fn test_insert_image_validates_explicit_url() {
        let mut session = EditSession::new(initial_document());

        let err = insert_image(&mut session, Some("https://example.com/page.html"));
        assert!(matches!(err, Err(EditorError::NotAnImageUrl(_))));
        assert_eq!(session.document().len(), 1);

        insert_image(&mut session, Some("https://example.com/pic.png")).unwrap();
        assert_eq!(session.document().len(), 2);
    }

    #[test]
    fn test_delete_image_requires_an_image() {
        let mut session = EditSession::new(initial_document());
        let err = delete_image(&mut session, &Path::block(0));
        assert!(matches!(err, Err(EditorError::NotAnImage(_))));

        let at = insert_image(&mut session, None).unwrap();
        delete_image(&mut session, &at).unwrap();
        assert_eq!(session.document().len(), 1);
        assert_eq!(session.last_image_path(), None);
    }
}
