use clap::Args;

use crate::catalog::store::Catalog;
use crate::cli::OutputFormat;
use crate::core::record::Record;

#[derive(Args)]
pub struct ListArgs {}

/// Execute the list subcommand
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or is corrupt.
pub fn run(
    _args: ListArgs,
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

    let records: Vec<&Record> = catalog.list().iter().collect();
    print_records(&records, format)?;

    Ok(())
}

/// Print a set of records in the requested output format.
///
/// Shared by `list` and `find`; both produce the same row shape.
pub(crate) fn print_records(records: &[&Record], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No books in catalog.");
                return Ok(());
            }

            // Calculate column widths dynamically
            let id_width = records
                .iter()
                .map(|r| r.id.as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let title_width = records
                .iter()
                .map(|r| r.title.chars().count().min(40))
                .max()
                .unwrap_or(5)
                .max(5);
            let author_width = records
                .iter()
                .map(|r| r.author.chars().count().min(30))
                .max()
                .unwrap_or(6)
                .max(6);

            println!("Catalog ({} book(s))\n", records.len());
            println!(
                "{:<id_w$} {:<title_w$} {:<author_w$} {:>4} {:>12}",
                "ID",
                "Title",
                "Author",
                "Year",
                "Status",
                id_w = id_width,
                title_w = title_width,
                author_w = author_width,
            );
            println!("{}", "-".repeat(id_width + title_width + author_width + 24));

            for r in records {
                println!(
                    "{:<id_w$} {:<title_w$} {:<author_w$} {:>4} {:>12}",
                    r.id.as_str(),
                    truncate(&r.title, title_width),
                    truncate(&r.author, author_width),
                    r.year,
                    r.status.as_str(),
                    id_w = id_width,
                    title_w = title_width,
                    author_w = author_width,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Tsv => {
            println!("id\ttitle\tauthor\tyear\tstatus");
            for r in records {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    r.id, r.title, r.author, r.year, r.status
                );
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
