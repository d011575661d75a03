//! Core data types for the library catalog.
//!
//! This module provides the fundamental types used throughout the crate:
//!
//! - [`Record`]: one catalog entry (title, author, year, availability)
//! - [`RecordId`]: unique record identifier, a random UUID v4 string
//! - [`Status`]: two-value availability enumeration with stable
//!   serialized tokens (`"available"` / `"unavailable"`)

pub mod record;
pub mod types;

pub use record::Record;
pub use types::{RecordId, Status};
