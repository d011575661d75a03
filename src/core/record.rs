use serde::{Deserialize, Serialize};

use crate::core::types::{RecordId, Status};

/// One catalog entry: a book with title, author, publication year, and
/// availability status.
///
/// The on-disk shape is a flat map with exactly the keys `id`, `title`,
/// `author`, `year`, `status`. Deserialization fails if any key is missing
/// or `status` is not a canonical token, so a successful round trip
/// reproduces every field.
///
/// Only `status` is meant to change after creation, and only through
/// [`Catalog::update_status`](crate::catalog::store::Catalog::update_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned by the catalog at creation
    pub id: RecordId,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Publication year
    pub year: i32,

    /// Availability status
    pub status: Status,
}

impl Record {
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: Status::default(),
        }
    }
}
