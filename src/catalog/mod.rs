//! Catalog storage: the in-memory record collection and its JSON backing file.
//!
//! A [`Catalog`](store::Catalog) owns an ordered sequence of
//! [`Record`](crate::core::Record)s and keeps it mirrored to a single JSON
//! file. The file holds a flat array of record maps; it is read once when the
//! catalog is opened and fully rewritten after every mutation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookshelf::Catalog;
//!
//! let mut catalog = Catalog::open("catalog.json").unwrap();
//! let record = catalog.add("1984", "George Orwell", 1949).unwrap();
//! println!("added {}", record.id);
//!
//! for record in catalog.list() {
//!     println!("{}: {} ({})", record.id, record.title, record.year);
//! }
//! ```

pub mod store;

pub use store::{Catalog, CatalogError};
