use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a record in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Generate a fresh random identifier (UUID v4)
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability status of a catalog record
///
/// Serialized with the canonical lowercase tokens `"available"` and
/// `"unavailable"`; these are the only tokens accepted in storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Available,
    Unavailable,
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_canonical_tokens() {
        assert_eq!(
            serde_json::to_string(&Status::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&Status::Unavailable).unwrap(),
            "\"unavailable\""
        );
    }

    #[test]
    fn test_status_rejects_unknown_token() {
        let result: Result<Status, _> = serde_json::from_str("\"lost\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_default_is_available() {
        assert_eq!(Status::default(), Status::Available);
    }
}
