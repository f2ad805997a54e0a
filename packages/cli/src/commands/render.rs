use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use colored::Colorize;
use vellum_model::Document;
use vellum_renderer::{compile_document, CompileOptions, RenderContext};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input document (JSON node array)
    input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line HTML without indentation
    #[arg(long)]
    compact: bool,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let document: Document =
        serde_json::from_str(&source).context("parsing document JSON")?;
    document.validate().context("document failed validation")?;

    let options = CompileOptions {
        pretty: !args.compact,
        ..CompileOptions::default()
    };
    let html = compile_document(&document, &RenderContext::default(), options);

    match args.output {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("{} wrote {}", "✓".green(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
