use super::open_session;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_compiler_html::{compile_to_html, CompileOptions as HtmlOptions};
use pagesmith_compiler_react::{compile_to_react, CompileOptions as ReactOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Slug of the page to compile
    pub slug: String,

    /// Target format (html, react)
    #[arg(short, long, default_value = "html")]
    pub target: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn compile(args: CompileArgs, store: &Path) -> Result<()> {
    let session = open_session(store);

    let page = session
        .pages()
        .iter()
        .find(|p| p.slug == args.slug)
        .ok_or_else(|| anyhow!("No page with slug {}", args.slug))?;

    let (output, extension) = match args.target.as_str() {
        "html" => (compile_to_html(page, HtmlOptions::default()), "html"),
        "react" => (compile_to_react(page, ReactOptions::default()), "jsx"),
        other => {
            return Err(anyhow!("Unknown target: {}. Use: html or react", other));
        }
    };

    if args.stdout {
        println!("{}", output);
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)?;
    let out_path = args.out_dir.join(format!("{}.{}", page.slug, extension));
    fs::write(&out_path, output)?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        page.slug,
        out_path.display()
    );
    Ok(())
}
