//! docportal - A terminal portal for GraphQL documentation
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use portal_core::prelude::{Error, Result};
use tracing::info;

/// docportal - Browse a GraphQL documentation site from the terminal
#[derive(Parser, Debug)]
#[command(name = "docportal")]
#[command(about = "Browse a GraphQL documentation site from the terminal", long_about = None)]
struct Args {
    /// Path to the docs project (the directory holding `.portal/`)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a default `.portal/config.toml` and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    docs_portal::logging::init()?;

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if !project_path.is_dir() {
        eprintln!("❌ Docs project not found: {}", project_path.display());
        eprintln!();
        eprintln!("Hint: Run docportal from a docs project directory,");
        eprintln!("      or pass the project path as an argument:");
        eprintln!("      docportal /path/to/docs-site");
        return Err(Error::DocsRootNotFound { path: project_path });
    }

    if args.init {
        docs_portal::config::init_config_dir(&project_path)?;
        eprintln!(
            "✅ Wrote default configuration to {}",
            project_path.join(docs_portal::config::PORTAL_DIR).display()
        );
        return Ok(());
    }

    info!("Docs project: {}", project_path.display());

    docs_portal::run_with_project(&project_path).await
}
