//! # bookshelf
//!
//! A library for managing a personal book catalog stored in a flat JSON file.
//!
//! The catalog holds one record per book (title, author, publication year,
//! availability status) and supports add, remove, search, list, and
//! status-update operations. The whole collection lives in memory and is
//! rewritten to disk after every mutation, so the file on disk is always a
//! complete, human-readable snapshot.
//!
//! The design is deliberately simple: single process, single user, linear
//! scans, no locking. For a personal catalog of hundreds of books that is
//! the right trade.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookshelf::{Catalog, Status};
//!
//! let mut catalog = Catalog::open("catalog.json").unwrap();
//!
//! let record = catalog.add("1984", "George Orwell", 1949).unwrap();
//! catalog.update_status(&record.id, Status::Unavailable).unwrap();
//!
//! for hit in catalog.find(Some("1984"), None, None) {
//!     println!("{}: {} [{}]", hit.id, hit.title, hit.status);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: record and status types
//! - [`catalog`]: the JSON-backed collection manager
//! - [`cli`]: command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;

// Re-export commonly used types for convenience
pub use catalog::store::{Catalog, CatalogError};
pub use core::record::Record;
pub use core::types::{RecordId, Status};
