use clap::Args;

use crate::catalog::store::Catalog;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(required = true)]
    pub title: String,

    /// Book author
    #[arg(required = true)]
    pub author: String,

    /// Publication year
    #[arg(required = true, allow_negative_numbers = true)]
    pub year: i32,
}

/// Execute the add subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be opened or the new record cannot
/// be written to the backing file.
pub fn run(
    args: AddArgs,
    catalog_path: &std::path::Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut catalog = Catalog::open(catalog_path)?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} record(s) from {}",
            catalog.len(),
            catalog_path.display()
        );
    }

    let record = catalog.add(args.title, args.author, args.year)?;

    match format {
        OutputFormat::Text => {
            println!("Added \"{}\" by {} ({})", record.title, record.author, record.year);
            println!("ID: {}", record.id);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Tsv => {
            println!("id\ttitle\tauthor\tyear\tstatus");
            println!(
                "{}\t{}\t{}\t{}\t{}",
                record.id, record.title, record.author, record.year, record.status
            );
        }
    }

    Ok(())
}
