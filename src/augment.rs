//! Dataset augmentation driver.
//!
//! Each source sentence fans out into one identity record followed by one
//! record per configured transform, in transform order. Records are grouped by
//! source row and keep the source row order.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::AugmentConfig;
use crate::dataset::{AugmentedRecord, DatasetReader, DatasetWriter, SourceRow};
use crate::error::Result;
use crate::noise::{ErrorInjector, RandomSource, Transform};

/// Counters collected while augmenting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentStats {
    /// Source rows seen.
    pub rows_read: usize,
    /// Source rows skipped because they had no sentence.
    pub rows_skipped: usize,
    /// Augmented records produced, identity rows included.
    pub records_written: usize,
    /// Per transform, how many outputs came back identical to the source.
    pub unchanged: BTreeMap<String, usize>,
}

/// Outcome of a complete file-to-file run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub seed: Option<u64>,
    pub transforms: Vec<Transform>,
    pub stats: AugmentStats,
    pub duration_ms: u64,
}

/// Fans source rows out into augmented records.
pub struct Augmenter<R: RandomSource> {
    injector: ErrorInjector<R>,
    transforms: Vec<Transform>,
}

impl<R: RandomSource> Augmenter<R> {
    /// Create an augmenter applying every transform in the standard order.
    pub fn new(injector: ErrorInjector<R>) -> Self {
        Augmenter {
            injector,
            transforms: Transform::ALL.to_vec(),
        }
    }

    /// Restrict the transforms applied to each sentence.
    ///
    /// The selection must be a non-empty subsequence of [`Transform::ALL`].
    pub fn with_transforms(mut self, transforms: Vec<Transform>) -> Result<Self> {
        Transform::check_selection(&transforms)?;
        self.transforms = transforms;
        Ok(self)
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// The identity record followed by one record per transform.
    pub fn augment_sentence(&mut self, id: &str, sentence: &str) -> Vec<AugmentedRecord> {
        let mut records = Vec::with_capacity(self.transforms.len() + 1);
        records.push(AugmentedRecord::identity(id, sentence));

        for &transform in &self.transforms {
            let error = self.injector.apply(transform, sentence);
            records.push(AugmentedRecord::corrupted(id, error, sentence, transform));
        }

        records
    }

    /// Augment every row in order, skipping rows without a sentence.
    pub fn augment_rows(&mut self, rows: &[SourceRow]) -> (Vec<AugmentedRecord>, AugmentStats) {
        let mut stats = AugmentStats::default();
        let mut records = Vec::with_capacity(rows.len() * (self.transforms.len() + 1));

        for row in rows {
            stats.rows_read += 1;

            let Some(sentence) = row.sentence() else {
                warn!("Skipping ID {}: no sentence in 'output'", row.id);
                stats.rows_skipped += 1;
                continue;
            };

            info!("Processing ID: {}", row.id);
            for record in self.augment_sentence(&row.id, sentence) {
                if let Some(transform) = record.transform
                    && !record.is_corrupted()
                {
                    *stats.unchanged.entry(transform.to_string()).or_insert(0) += 1;
                }
                records.push(record);
            }
        }

        stats.records_written = records.len();
        (records, stats)
    }
}

/// Read the source table, augment it and write the result.
pub fn run(config: &AugmentConfig) -> Result<AugmentSummary> {
    config.validate()?;
    let start_time = Instant::now();
    let delimiter = config.delimiter_byte()?;

    let rows = DatasetReader::new()
        .with_delimiter(delimiter)
        .read_path(&config.input_path)?;
    info!(
        "Loaded {} rows from '{}'",
        rows.len(),
        config.input_path.display()
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut augmenter =
        Augmenter::new(ErrorInjector::new(rng)).with_transforms(config.transforms.clone())?;
    let (records, stats) = augmenter.augment_rows(&rows);

    let mut writer = DatasetWriter::create(&config.output_path, config.write_bom, delimiter)?;
    writer.write_all(&records)?;
    writer.finish()?;

    info!(
        "Processed data saved to: {} ({} records, {} rows skipped)",
        config.output_path.display(),
        stats.records_written,
        stats.rows_skipped
    );

    Ok(AugmentSummary {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        seed: config.seed,
        transforms: config.transforms.clone(),
        stats,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::ScriptedSource;

    #[test]
    fn test_fan_out_order() {
        let mut augmenter = Augmenter::new(ErrorInjector::seeded(8));
        let records = augmenter.augment_sentence("42", "안녕하세요 반가워요");

        assert_eq!(records.len(), 6);
        assert_eq!(records[0], AugmentedRecord::identity("42", "안녕하세요 반가워요"));
        let transforms: Vec<Option<Transform>> = records.iter().map(|r| r.transform).collect();
        assert_eq!(
            transforms,
            vec![
                None,
                Some(Transform::DropCoda),
                Some(Transform::ReplaceOnset),
                Some(Transform::ReplaceCoda),
                Some(Transform::ReplaceNucleus),
                Some(Transform::Compound),
            ]
        );
        for record in &records {
            assert_eq!(record.original_id, "42");
            assert_eq!(record.original, "안녕하세요 반가워요");
        }
        for record in &records[1..5] {
            assert!(record.is_corrupted());
        }
    }

    #[test]
    fn test_scripted_fan_out() {
        let injector = ErrorInjector::new(ScriptedSource::new([0]));
        let mut augmenter = Augmenter::new(injector)
            .with_transforms(vec![Transform::DropCoda])
            .unwrap();
        let records = augmenter.augment_sentence("1", "안녕하세요");
        let errors: Vec<&str> = records.iter().map(|r| r.error.as_str()).collect();
        assert_eq!(errors, vec!["안녕하세요", "아녕하세요"]);
    }

    #[test]
    fn test_with_transforms_keeps_output_order() {
        let augmenter = Augmenter::new(ErrorInjector::seeded(1));
        assert!(augmenter.with_transforms(Vec::new()).is_err());

        let augmenter = Augmenter::new(ErrorInjector::seeded(1));
        let reordered = vec![Transform::Compound, Transform::ReplaceOnset];
        assert!(augmenter.with_transforms(reordered).is_err());

        let mut augmenter = Augmenter::new(ErrorInjector::seeded(1))
            .with_transforms(vec![Transform::ReplaceOnset, Transform::Compound])
            .unwrap();
        let transforms: Vec<Option<Transform>> = augmenter
            .augment_sentence("7", "밥을 먹었다")
            .iter()
            .map(|r| r.transform)
            .collect();
        assert_eq!(
            transforms,
            vec![None, Some(Transform::ReplaceOnset), Some(Transform::Compound)]
        );
    }

    #[test]
    fn test_augment_rows_skips_and_counts() {
        let rows = vec![
            SourceRow::new("1", "감사합니다"),
            SourceRow {
                id: "2".to_string(),
                output: None,
            },
            SourceRow::new("3", "OK!"),
        ];
        let mut augmenter = Augmenter::new(ErrorInjector::seeded(1));
        let (records, stats) = augmenter.augment_rows(&rows);

        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.rows_skipped, 1);
        assert_eq!(records.len(), 12);
        assert_eq!(stats.records_written, 12);
        assert!(records[..6].iter().all(|r| r.original_id == "1"));
        assert!(records[6..].iter().all(|r| r.original_id == "3"));

        // "OK!" has no syllables, so every transform leaves it alone.
        for transform in Transform::ALL {
            assert!(stats.unchanged[transform.name()] >= 1);
        }
    }
}
