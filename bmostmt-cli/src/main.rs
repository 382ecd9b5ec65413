use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bmostmt_core::builtin_layouts;

mod extract;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "bmostmt",
    version,
    about = "Parse a supported BMO statement PDF into a CSV of transactions"
)]
struct Cli {
    /// PDF file to parse
    #[arg(long)]
    file: PathBuf,

    /// Add identifiers to each row as the first column
    #[arg(long)]
    id: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pdf = fs::read(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
    let text = extract::pdf_to_text(&pdf)?;

    let layouts = builtin_layouts()?;
    let Some(layout) = layouts.iter().find(|l| l.check(&text)) else {
        eprintln!(
            "no supported statement layout matched {}",
            cli.file.display()
        );
        return Ok(());
    };

    let report = layout.parse(&text)?;
    for line in &report.rejected {
        eprintln!("{line}");
    }

    output::write_csv(io::stdout(), layout, &report.rows, cli.id)?;
    Ok(())
}
