//! Rendering a live editing session: the dispatcher consumes whatever the
//! editor produces.

use vellum_editor::{actions, handle_key_event, EditSession, KeyEvent};
use vellum_model::initial_document;
use vellum_renderer::{compile_document, render_document, CompileOptions, RenderContext, RenderedElement};

#[test]
fn test_session_render_tracks_edits() {
    let mut session = EditSession::new(initial_document());

    let ctx = RenderContext::default();
    let before = render_document(session.document(), &ctx);
    assert!(matches!(before[0], RenderedElement::Paragraph { .. }));

    handle_key_event(&mut session, &KeyEvent::ctrl('r')).unwrap();
    let after = render_document(session.document(), &ctx);
    assert!(matches!(after[0], RenderedElement::Code { .. }));
}

#[test]
fn test_selected_focused_image_renders_delete_button() {
    let mut session = EditSession::new(initial_document());
    let at = actions::insert_image(&mut session, None).unwrap();
    session.set_focus(true);

    // The session tracks the image as the selection target through the
    // caret that landed inside the void block.
    let ctx = RenderContext::new(session.last_image_path(), session.is_focused());
    assert_eq!(session.last_image_path(), Some(at));

    let html = compile_document(session.document(), &ctx, CompileOptions::default());
    assert!(html.contains("image-block selected"));
    assert!(html.contains("image-delete"));

    // Blur: affordance goes away.
    session.set_focus(false);
    let ctx = RenderContext::new(session.last_image_path(), session.is_focused());
    let html = compile_document(session.document(), &ctx, CompileOptions::default());
    assert!(!html.contains("image-delete"));
}
