//! Configuration for augmentation runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};
use crate::noise::Transform;

/// Default source table path.
pub const DEFAULT_INPUT_PATH: &str = "data/train.csv";

/// Default augmented table path.
pub const DEFAULT_OUTPUT_PATH: &str = "data/augmented_trivial_error.csv";

/// Configuration for one augmentation run.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// changes:
///
/// ```json
/// { "input_path": "corpus/train.csv", "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Source table with `ID` and `output` columns.
    pub input_path: PathBuf,

    /// Destination of the augmented table.
    pub output_path: PathBuf,

    /// Seed for the random generator. Drawn from OS entropy when absent.
    pub seed: Option<u64>,

    /// Prefix the output with a UTF-8 byte order mark.
    pub write_bom: bool,

    /// CSV delimiter for both tables.
    pub delimiter: char,

    /// Transforms applied to each sentence. Must be a non-empty subsequence
    /// of [`Transform::ALL`]; leaving transforms out is the only way a run
    /// writes fewer than six records per sentence.
    pub transforms: Vec<Transform>,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        AugmentConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            write_bom: true,
            delimiter: ',',
            transforms: Transform::ALL.to_vec(),
        }
    }
}

impl AugmentConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AugmentError::config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let config: AugmentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;

        if self.input_path == self.output_path {
            return Err(AugmentError::config(
                "input_path and output_path must differ",
            ));
        }

        Transform::check_selection(&self.transforms)
    }

    /// The delimiter as the single byte the CSV layer expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter {
            '"' | '\n' | '\r' => Err(AugmentError::config(format!(
                "delimiter {:?} is not allowed",
                self.delimiter
            ))),
            ch if ch.is_ascii() => Ok(ch as u8),
            ch => Err(AugmentError::config(format!(
                "delimiter {ch:?} must be a single ASCII character"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AugmentConfig::default();
        assert_eq!(config.transforms, Transform::ALL.to_vec());
        assert!(config.write_bom);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "input_path": "in.csv", "seed": 42, "transforms": ["drop-coda", "compound"] }}"#
        )
        .unwrap();

        let config = AugmentConfig::load(file.path()).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.transforms,
            vec![Transform::DropCoda, Transform::Compound]
        );
    }

    #[test]
    fn test_load_rejects_reordered_transforms() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "transforms": ["compound", "drop-coda"] }}"#).unwrap();
        assert!(AugmentConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_invalid_config() {
        let config = AugmentConfig {
            delimiter: '、',
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AugmentConfig {
            transforms: vec![Transform::DropCoda, Transform::DropCoda],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AugmentConfig {
            transforms: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AugmentConfig {
            output_path: PathBuf::from(DEFAULT_INPUT_PATH),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
