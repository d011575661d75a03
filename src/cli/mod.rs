//! Command-line interface for bookshelf.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **add**: add a book to the catalog
//! - **remove**: remove a book by id
//! - **find**: search by title, author, and/or year
//! - **list**: show every book in the catalog
//! - **set-status**: mark a book available or unavailable
//!
//! ## Usage
//!
//! ```text
//! # Add a book
//! bookshelf add "1984" "George Orwell" 1949
//!
//! # Search (criteria combine with AND)
//! bookshelf find --title dune --year 1965
//!
//! # JSON output for scripting
//! bookshelf list --format json
//!
//! # Mark a book as checked out
//! bookshelf set-status 3c6e48e4-... unavailable
//!
//! # Use a different catalog file
//! bookshelf --catalog ~/books.json list
//! ```
//!
//! The catalog file is created on the first mutating command; prompting-free
//! subcommands replace the original interactive menu.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod add;
pub mod find;
pub mod list;
pub mod remove;
pub mod status;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Manage a personal library catalog stored in a JSON file")]
#[command(
    long_about = "bookshelf keeps a catalog of books (title, author, year, availability) in a single human-readable JSON file.\n\nEvery mutating command rewrites the whole file, so the file always holds a complete snapshot of the catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog file
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the catalog
    Add(add::AddArgs),

    /// Remove a book by id
    Remove(remove::RemoveArgs),

    /// Search the catalog by title, author, and/or year
    Find(find::FindArgs),

    /// List every book in the catalog
    List(list::ListArgs),

    /// Change a book's availability status
    SetStatus(status::SetStatusArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
