//! Row types for the source and augmented tables.

use serde::{Deserialize, Serialize};

use crate::noise::Transform;

/// Column holding the record identifier in the source table.
pub const ID_COLUMN: &str = "ID";

/// Column holding the source sentence in the source table.
pub const SENTENCE_COLUMN: &str = "output";

/// Header of the augmented table.
pub const AUGMENTED_HEADER: [&str; 3] = ["original_id", "error", "original"];

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    #[serde(rename = "ID")]
    pub id: String,
    /// The well-formed sentence. Missing or empty in malformed rows.
    #[serde(default)]
    pub output: Option<String>,
}

impl SourceRow {
    pub fn new<I: Into<String>, S: Into<String>>(id: I, sentence: S) -> Self {
        SourceRow {
            id: id.into(),
            output: Some(sentence.into()),
        }
    }

    /// The sentence, if the row has a non-empty one.
    pub fn sentence(&self) -> Option<&str> {
        self.output.as_deref().filter(|sentence| !sentence.is_empty())
    }
}

/// One row of the augmented table: a (possibly corrupted) sentence paired
/// with its original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentedRecord {
    pub original_id: String,
    pub error: String,
    pub original: String,
    /// Transform that produced `error`; `None` for the identity row.
    #[serde(skip)]
    pub transform: Option<Transform>,
}

impl AugmentedRecord {
    /// The pass-through row whose error text equals the original.
    pub fn identity(id: &str, sentence: &str) -> Self {
        AugmentedRecord {
            original_id: id.to_string(),
            error: sentence.to_string(),
            original: sentence.to_string(),
            transform: None,
        }
    }

    pub fn corrupted(id: &str, error: String, original: &str, transform: Transform) -> Self {
        AugmentedRecord {
            original_id: id.to_string(),
            error,
            original: original.to_string(),
            transform: Some(transform),
        }
    }

    /// Whether the error text differs from the original.
    pub fn is_corrupted(&self) -> bool {
        self.error != self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_row_sentence() {
        assert_eq!(SourceRow::new("1", "안녕").sentence(), Some("안녕"));
        assert_eq!(SourceRow::new("2", "").sentence(), None);
        let missing = SourceRow {
            id: "3".to_string(),
            output: None,
        };
        assert_eq!(missing.sentence(), None);
    }

    #[test]
    fn test_identity_record() {
        let record = AugmentedRecord::identity("7", "좋아요");
        assert_eq!(record.error, record.original);
        assert!(!record.is_corrupted());
        assert_eq!(record.transform, None);
    }
}
