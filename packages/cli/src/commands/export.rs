use super::open_session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn export(args: ExportArgs, store: &Path) -> Result<()> {
    let session = open_session(store);
    let payload = session.export_pages()?;

    match args.out {
        Some(path) => {
            fs::write(&path, payload)?;
            println!(
                "{} Exported {} pages to {}",
                "✓".green(),
                session.pages().len(),
                path.display()
            );
        }
        None => println!("{}", payload),
    }

    Ok(())
}
