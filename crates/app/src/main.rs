//! cmf-swap - CMF material-swap preview renderer
//!
//! Renders procedural material previews to JPEG files, or to JSON responses
//! shaped for the UI. `serve` answers JSON requests line by line on stdio.

use anyhow::Result;
use clap::Parser;
use cmf_render::{Locale, MaterialKind};
use tracing_subscriber::EnvFilter;

mod batch;
mod cli;
mod config;
mod serve;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => batch::run(args).await,
        Command::Serve(canvas) => serve::run(canvas).await,
        Command::List { korean } => {
            let locale = if korean { Locale::Korean } else { Locale::English };
            for line in preset_lines(locale) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Log to stderr so JSON output on stdout stays parseable.
/// Defaults to `info`, overridable with `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn preset_lines(locale: Locale) -> Vec<String> {
    MaterialKind::ALL
        .iter()
        .map(|kind| format!("{:<8} {:<8} {}", kind.id(), kind.label(locale), kind.finish()))
        .collect()
}
