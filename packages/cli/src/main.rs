mod commands;

use clap::{Parser, Subcommand};
use commands::{compile, export, import, pages, CompileArgs, ExportArgs, NewArgs};
use std::path::PathBuf;

/// Pagesmith CLI - block-based page builder and exporter
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the page collection store
    #[arg(long, global = true, default_value = "pages.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List pages in the store
    List,

    /// List the available page templates
    Templates,

    /// Create a new page (optionally from a template) and save it
    New(NewArgs),

    /// Delete a page by id
    Delete {
        /// Page id
        id: String,
    },

    /// Export the whole page collection as pretty-printed JSON
    Export(ExportArgs),

    /// Import a page collection from a JSON file
    Import {
        /// JSON file containing an array of pages
        file: PathBuf,
    },

    /// Compile a page to a target format
    Compile(CompileArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => pages::list(&cli.store),
        Command::Templates => pages::templates(),
        Command::New(args) => pages::new_page(args, &cli.store),
        Command::Delete { id } => pages::delete(&id, &cli.store),
        Command::Export(args) => export::export(args, &cli.store),
        Command::Import { file } => import::import(&file, &cli.store),
        Command::Compile(args) => compile::compile(args, &cli.store),
    }
}
