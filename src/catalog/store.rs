use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::record::Record;
use crate::core::types::{RecordId, Status};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to access catalog storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("No record with id '{0}'")]
    NotFound(RecordId),
}

/// The library catalog: an insertion-ordered record collection mirrored to a
/// JSON file.
///
/// The backing file is read once in [`Catalog::open`] and fully rewritten
/// after every mutation, so a single-process caller always sees storage and
/// memory in agreement. Read operations never touch the file.
#[derive(Debug)]
pub struct Catalog {
    /// Location of the backing file, fixed for the catalog's lifetime
    storage_path: PathBuf,

    /// All records, in insertion order
    records: Vec<Record>,
}

impl Catalog {
    /// Open the catalog at `path`, loading every record from the backing
    /// file. A missing file yields an empty catalog; no file is created
    /// until the first mutation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Corrupt`] if the file is not a JSON array of
    /// record maps or any record fails to deserialize, and
    /// [`CatalogError::Io`] if the file exists but cannot be read. No
    /// partial collection is exposed on failure.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let storage_path = path.into();

        let records = if storage_path.exists() {
            let content = std::fs::read_to_string(&storage_path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        debug!(
            "loaded {} record(s) from {}",
            records.len(),
            storage_path.display()
        );

        Ok(Self {
            storage_path,
            records,
        })
    }

    /// Rewrite the backing file from the in-memory state.
    ///
    /// Records are written in order as a pretty-printed JSON array, with
    /// non-ASCII text unescaped. The write goes to a temporary file that is
    /// renamed over the target, so the file is never observed half-written.
    fn persist(&self) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(&self.records)?;

        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.storage_path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, &self.storage_path)?;

        debug!(
            "persisted {} record(s) to {}",
            self.records.len(),
            self.storage_path.display()
        );

        Ok(())
    }

    /// Add a new record with a freshly generated id and status
    /// [`Status::Available`], appended at the end of the collection.
    ///
    /// Inputs are stored as given; validating them is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error only if the rewrite of the backing file fails. The
    /// record is appended in memory before the write, so on failure memory
    /// and storage diverge until the next successful persist.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Record, CatalogError> {
        let record = Record::new(RecordId::generate(), title, author, year);
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Remove the record with the given id, preserving the relative order of
    /// the remaining records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no record has that id; the
    /// collection and the backing file are left untouched.
    pub fn remove(&mut self, id: &RecordId) -> Result<(), CatalogError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        self.records.remove(position);
        self.persist()
    }

    /// Find every record matching all supplied criteria.
    ///
    /// Title and author match by case-insensitive substring containment;
    /// year matches exactly. Absent criteria are not filtered on, so calling
    /// with none returns the full collection in order. Never fails; returns
    /// an empty vec when nothing matches.
    #[must_use]
    pub fn find(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        year: Option<i32>,
    ) -> Vec<&Record> {
        let title = title.map(str::to_lowercase);
        let author = author.map(str::to_lowercase);

        self.records
            .iter()
            .filter(|record| {
                if let Some(title) = &title {
                    if !record.title.to_lowercase().contains(title) {
                        return false;
                    }
                }
                if let Some(author) = &author {
                    if !record.author.to_lowercase().contains(author) {
                        return false;
                    }
                }
                if let Some(year) = year {
                    if record.year != year {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// Get a record by id
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// Set the status of the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no record has that id; the
    /// collection and the backing file are left untouched.
    pub fn update_status(&mut self, id: &RecordId, status: Status) -> Result<(), CatalogError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        record.status = status;
        self.persist()
    }

    /// All records, in insertion order
    #[must_use]
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Path of the backing file
    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Number of records in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> Catalog {
        Catalog::open(dir.path().join("catalog.json")).unwrap()
    }

    #[test]
    fn test_open_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let catalog = Catalog::open(&path).unwrap();

        assert!(catalog.is_empty());
        // No file is created until the first write
        assert!(!path.exists());
    }

    #[test]
    fn test_add_assigns_fresh_id_and_available_status() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);

        let first = catalog.add("Test Book", "Test Author", 2024).unwrap();
        let second = catalog.add("Other Book", "Other Author", 2020).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.status, Status::Available);

        let found = catalog.find(Some("Test Book"), None, None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author, "Test Author");
        assert_eq!(found[0].year, 2024);
    }

    #[test]
    fn test_remove_missing_id_leaves_catalog_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);
        catalog.add("Test Book", "Test Author", 2024).unwrap();
        let before: Vec<Record> = catalog.list().to_vec();

        let result = catalog.remove(&RecordId::new("no-such-id"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(catalog.list(), before.as_slice());
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_records() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);
        let a = catalog.add("A", "Author", 2001).unwrap();
        let b = catalog.add("B", "Author", 2002).unwrap();
        let c = catalog.add("C", "Author", 2003).unwrap();

        catalog.remove(&b.id).unwrap();

        let titles: Vec<&str> = catalog.list().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
        assert!(catalog.get(&b.id).is_none());
        assert!(catalog.get(&a.id).is_some());
        assert!(catalog.get(&c.id).is_some());
    }

    #[test]
    fn test_find_is_case_insensitive_substring() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);
        catalog.add("Test Book", "Test Author", 2024).unwrap();

        assert_eq!(catalog.find(Some("test"), None, None).len(), 1);
        assert_eq!(catalog.find(Some("BOOK"), None, None).len(), 1);
        assert_eq!(catalog.find(None, Some("test aut"), None).len(), 1);
        assert_eq!(catalog.find(Some("missing"), None, None).len(), 0);
    }

    #[test]
    fn test_find_combines_criteria_with_and() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);
        catalog.add("Dune", "Frank Herbert", 1965).unwrap();
        catalog.add("Dune Messiah", "Frank Herbert", 1969).unwrap();

        assert_eq!(catalog.find(Some("dune"), None, None).len(), 2);
        assert_eq!(catalog.find(Some("dune"), None, Some(1969)).len(), 1);
        assert_eq!(catalog.find(None, Some("herbert"), Some(1965)).len(), 1);
        assert_eq!(catalog.find(Some("dune"), Some("asimov"), None).len(), 0);
    }

    #[test]
    fn test_find_without_criteria_equals_list() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);
        catalog.add("A", "X", 2001).unwrap();
        catalog.add("B", "Y", 2002).unwrap();

        let all: Vec<&Record> = catalog.find(None, None, None);
        let listed: Vec<&Record> = catalog.list().iter().collect();
        assert_eq!(all, listed);
    }

    #[test]
    fn test_update_status_changes_only_that_record() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);
        let first = catalog.add("Test Book", "Test Author", 2024).unwrap();
        let second = catalog.add("Other Book", "Other Author", 2020).unwrap();

        catalog
            .update_status(&first.id, Status::Unavailable)
            .unwrap();

        let updated = catalog.get(&first.id).unwrap();
        assert_eq!(updated.status, Status::Unavailable);
        assert_eq!(updated.title, first.title);
        assert_eq!(updated.author, first.author);
        assert_eq!(updated.year, first.year);
        assert_eq!(catalog.get(&second.id).unwrap().status, Status::Available);
    }

    #[test]
    fn test_update_status_missing_id_fails() {
        let dir = TempDir::new().unwrap();
        let mut catalog = open_in(&dir);

        let missing = RecordId::generate();
        let result = catalog.update_status(&missing, Status::Unavailable);
        match result {
            Err(CatalogError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_open_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = Catalog::open(&path);
        assert!(matches!(result, Err(CatalogError::Corrupt(_))));
    }

    #[test]
    fn test_open_rejects_invalid_status_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": "1", "title": "T", "author": "A", "year": 2000, "status": "lost"}]"#,
        )
        .unwrap();

        let result = Catalog::open(&path);
        assert!(matches!(result, Err(CatalogError::Corrupt(_))));
    }
}
