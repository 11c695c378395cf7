//! Source table reader.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::dataset::record::{ID_COLUMN, SENTENCE_COLUMN, SourceRow};
use crate::error::{AugmentError, Result};

/// Reads the whole source table into memory.
///
/// Extra columns are ignored. A leading UTF-8 byte order mark is tolerated.
/// Field values are kept verbatim; no whitespace trimming is applied.
#[derive(Debug, Clone)]
pub struct DatasetReader {
    /// CSV delimiter (default: ',')
    delimiter: u8,
    /// Whether to allow rows with differing field counts
    flexible: bool,
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader {
    /// Create a new reader with comma delimiter.
    pub fn new() -> Self {
        DatasetReader {
            delimiter: b',',
            flexible: false,
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to allow flexible field counts.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Read all rows from a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<SourceRow>> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| {
            AugmentError::dataset(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        self.read_str(&input)
    }

    /// Read all rows from any reader.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Vec<SourceRow>> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.read_str(&input)
    }

    /// Read all rows from CSV text.
    pub fn read_str(&self, input: &str) -> Result<Vec<SourceRow>> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(self.flexible)
            .from_reader(input.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AugmentError::dataset(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        for column in [ID_COLUMN, SENTENCE_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(AugmentError::dataset(format!(
                    "Missing required column '{column}'"
                )));
            }
        }

        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<SourceRow>().enumerate() {
            let row = result.map_err(|e| {
                AugmentError::dataset(format!("Failed to read CSV record {}: {}", index + 1, e))
            })?;
            rows.push(row);
        }

        Ok(rows)
    }
}
