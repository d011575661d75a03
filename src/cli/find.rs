use clap::Args;

use crate::catalog::store::Catalog;
use crate::cli::list::print_records;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct FindArgs {
    /// Match titles containing this text (case-insensitive)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Match authors containing this text (case-insensitive)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Match this publication year exactly
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,
}

/// Execute the find subcommand
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or is corrupt. A
/// search with no matches is not an error; it prints an empty result.
pub fn run(
    args: FindArgs,
    catalog_path: &std::path::Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = Catalog::open(catalog_path)?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} record(s) from {}",
            catalog.len(),
            catalog_path.display()
        );
    }

    let matches = catalog.find(args.title.as_deref(), args.author.as_deref(), args.year);

    if verbose {
        eprintln!("{} record(s) matched", matches.len());
    }

    if matches.is_empty() && matches!(format, OutputFormat::Text) {
        println!("No books found.");
        return Ok(());
    }

    print_records(&matches, format)?;

    Ok(())
}
