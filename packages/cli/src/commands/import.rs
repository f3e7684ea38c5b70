use super::open_session;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn import(file: &Path, store: &Path) -> Result<()> {
    let payload = fs::read_to_string(file)
        .with_context(|| format!("Cannot read {}", file.display()))?;

    let mut session = open_session(store);
    session
        .import_pages(&payload)
        .context("Import rejected; existing collection left unchanged")?;

    println!(
        "{} Imported {} pages from {}",
        "✓".green(),
        session.pages().len(),
        file.display()
    );
    Ok(())
}
