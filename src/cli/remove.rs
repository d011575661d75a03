use clap::Args;

use crate::catalog::store::Catalog;
use crate::core::types::RecordId;

#[derive(Args)]
pub struct RemoveArgs {
    /// Id of the book to remove
    #[arg(required = true)]
    pub id: String,
}

/// Execute the remove subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be opened, no record has the given
/// id, or the rewrite of the backing file fails.
pub fn run(args: RemoveArgs, catalog_path: &std::path::Path, verbose: bool) -> anyhow::Result<()> {
    let mut catalog = Catalog::open(catalog_path)?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} record(s) from {}",
            catalog.len(),
            catalog_path.display()
        );
    }

    let id = RecordId::new(args.id);
    catalog.remove(&id)?;

    println!("Removed {id}");

    Ok(())
}
