use anyhow::Context as _;
use clap::Args;
use colored::Colorize;
use vellum_editor::{
    actions, handle_key_event, DroppedFile, EditSession, InsertData, KeyEvent,
};
use vellum_model::{initial_document, Path};
use vellum_renderer::{compile_document, CompileOptions, RenderContext};

/// Stand-ins for dropped files. The decode path never parses pixels, it
/// only turns bytes into a data URL, so short payloads are enough.
const DEMO_PNG: &[u8] = b"\x89PNG\r\n\x1a\nvellum demo pixel";
const DEMO_GIF: &[u8] = b"GIF89avellum demo pixel";

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Single-line HTML without indentation
    #[arg(long)]
    compact: bool,
}

pub async fn run(args: DemoArgs) -> anyhow::Result<()> {
    let options = CompileOptions {
        pretty: !args.compact,
        ..CompileOptions::default()
    };

    let mut session = EditSession::new(initial_document());
    session.set_focus(true);
    print_step(&session, "Initial document", &options);

    actions::insert_demo_text(&mut session).context("insert text")?;
    print_step(&session, "Toolbar: insert text", &options);

    handle_key_event(&mut session, &KeyEvent::ctrl('r')).context("toggle code block")?;
    print_step(&session, "Ctrl+R: toggle code block", &options);

    handle_key_event(&mut session, &KeyEvent::ctrl('r')).context("toggle code block")?;
    print_step(&session, "Ctrl+R: toggle back", &options);

    let placeholder = actions::insert_image(&mut session, None).context("insert image")?;
    print_step(&session, "Toolbar: insert placeholder image", &options);

    drop_two_files(&mut session).await.context("drop image files")?;
    print_step(&session, "Drop two image files", &options);

    actions::delete_image(&mut session, &placeholder).context("delete image")?;
    print_step(&session, "Delete the placeholder image", &options);

    session.undo().context("undo")?;
    print_step(&session, "Undo", &options);

    session.redo().context("redo")?;
    print_step(&session, "Redo", &options);

    println!("{} demo complete", "✓".green());
    Ok(())
}

/// Write two small files to a temp directory and feed them to the session
/// as a drop payload, then wait for both decodes to land.
async fn drop_two_files(session: &mut EditSession) -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join("vellum-demo");
    tokio::fs::create_dir_all(&dir).await?;

    let png_path = dir.join("red-dot.png");
    let gif_path = dir.join("spacer.gif");
    tokio::fs::write(&png_path, DEMO_PNG).await?;
    tokio::fs::write(&gif_path, DEMO_GIF).await?;

    session.insert_data(&InsertData::from_files(vec![
        DroppedFile {
            name: "red-dot.png".to_string(),
            media_type: "image/png".to_string(),
            path: png_path,
        },
        DroppedFile {
            name: "spacer.gif".to_string(),
            media_type: "image/gif".to_string(),
            path: gif_path,
        },
    ]))?;

    // Two decodes in flight; they may finish in either order.
    session.pump_completion().await?;
    session.pump_completion().await?;
    Ok(())
}

fn print_step(session: &EditSession, title: &str, options: &CompileOptions) {
    println!("{} {}", "▸".cyan(), title.bold());

    let selected = Path::block(session.state().caret_block_index());
    let ctx = RenderContext::new(Some(selected), session.is_focused());
    println!("{}", compile_document(session.document(), &ctx, options.clone()));
}
