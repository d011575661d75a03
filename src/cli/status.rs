use clap::Args;

use crate::catalog::store::Catalog;
use crate::core::types::{RecordId, Status};

#[derive(Args)]
pub struct SetStatusArgs {
    /// Id of the book to update
    #[arg(required = true)]
    pub id: String,

    /// New availability status
    #[arg(required = true, value_enum)]
    pub status: StatusArg,
}

/// Status argument for the CLI
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StatusArg {
    Available,
    Unavailable,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => Status::Available,
            StatusArg::Unavailable => Status::Unavailable,
        }
    }
}

/// Execute the set-status subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be opened, no record has the given
/// id, or the rewrite of the backing file fails.
pub fn run(
    args: SetStatusArgs,
    catalog_path: &std::path::Path,
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

    let id = RecordId::new(args.id);
    let status = Status::from(args.status);
    catalog.update_status(&id, status)?;

    println!("Marked {id} as {status}");

    Ok(())
}
