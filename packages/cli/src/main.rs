mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{demo, init, render, DemoArgs, InitArgs, RenderArgs};

/// Vellum CLI - block editor engine demo
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable tracing output (RUST_LOG overrides the filter)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scripted editing session and print each rendered step
    Demo(DemoArgs),

    /// Render a JSON document to HTML
    Render(RenderArgs),

    /// Write the starting document as JSON
    Init(InitArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let result = match cli.command {
        Command::Demo(args) => demo::run(args).await,
        Command::Render(args) => render::run(args),
        Command::Init(args) => init::run(args),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
