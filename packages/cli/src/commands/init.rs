use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use colored::Colorize;
use vellum_model::initial_document;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the document JSON
    #[arg(default_value = "document.json")]
    output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let document = initial_document();
    let json = serde_json::to_string_pretty(&document).context("serializing document")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("{} wrote {}", "✓".green(), args.output.display());
    Ok(())
}
