use super::open_session;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_model::template;
use pagesmith_model::visitor::block_count;
use std::path::Path;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Page title
    pub title: String,

    /// Page slug (export name, unique per collection)
    pub slug: String,

    /// Template id to start from (see `pagesmith templates`)
    #[arg(short, long)]
    pub template: Option<String>,
}

pub fn list(store: &Path) -> Result<()> {
    let session = open_session(store);

    if session.pages().is_empty() {
        println!("{}", "No pages in the store yet".yellow());
        return Ok(());
    }

    for page in session.pages() {
        println!(
            "  {} {} ({}) - {} blocks, updated {}",
            "•".blue(),
            page.title.bold(),
            page.slug,
            block_count(&page.blocks),
            page.updated_at.format("%Y-%m-%d %H:%M")
        );
        println!("    id: {}", page.id.dimmed());
    }

    Ok(())
}

pub fn templates() -> Result<()> {
    for template in template::templates() {
        println!(
            "  {} {} - {}",
            "•".blue(),
            template.id.bold(),
            template.description
        );
    }
    Ok(())
}

pub fn new_page(args: NewArgs, store: &Path) -> Result<()> {
    let mut session = open_session(store);

    match &args.template {
        Some(template_id) => {
            session.create_page_from_template(template_id, &args.title, &args.slug)?
        }
        None => session.create_page(&args.title, &args.slug)?,
    }
    session.save_page()?;

    println!(
        "{} Created page {} ({})",
        "✓".green(),
        args.title.bold(),
        args.slug
    );
    Ok(())
}

pub fn delete(id: &str, store: &Path) -> Result<()> {
    let mut session = open_session(store);

    if !session.pages().iter().any(|p| p.id == id) {
        return Err(anyhow!("No page with id {}", id));
    }

    session.delete_page(id)?;
    println!("{} Deleted page {}", "✓".green(), id);
    Ok(())
}
