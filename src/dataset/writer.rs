//! Augmented table writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::dataset::UTF8_BOM;
use crate::dataset::record::{AUGMENTED_HEADER, AugmentedRecord};
use crate::error::{AugmentError, Result};

/// Streams augmented records to CSV.
///
/// The header row is written up front, so even an empty run produces a valid
/// table.
pub struct DatasetWriter<W: Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl DatasetWriter<File> {
    /// Create (or truncate) the file at `path`, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P, write_bom: bool, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        DatasetWriter::new(file, write_bom, delimiter)
    }
}

impl<W: Write> DatasetWriter<W> {
    /// Wrap `inner`, optionally prefixing a UTF-8 byte order mark.
    pub fn new(mut inner: W, write_bom: bool, delimiter: u8) -> Result<Self> {
        if write_bom {
            inner.write_all(UTF8_BOM)?;
        }

        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(AUGMENTED_HEADER)?;

        Ok(DatasetWriter { writer, written: 0 })
    }

    /// Append one record.
    pub fn write(&mut self, record: &AugmentedRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    /// Append every record in order.
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a AugmentedRecord>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Number of records written so far, header excluded.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| AugmentError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::Transform;

    #[test]
    fn test_write_with_bom() {
        let mut writer = DatasetWriter::new(Vec::new(), true, b',').unwrap();
        writer.write(&AugmentedRecord::identity("1", "안녕하세요")).unwrap();
        writer
            .write(&AugmentedRecord::corrupted(
                "1",
                "아녕하세요".to_string(),
                "안녕하세요",
                Transform::DropCoda,
            ))
            .unwrap();
        assert_eq!(writer.written(), 2);

        let bytes = writer.finish().unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "original_id,error,original\n1,안녕하세요,안녕하세요\n1,아녕하세요,안녕하세요\n"
        );
    }

    #[test]
    fn test_header_without_records() {
        let writer = DatasetWriter::new(Vec::new(), false, b',').unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "original_id,error,original\n");
    }

    #[test]
    fn test_quotes_fields_with_delimiters() {
        let mut writer = DatasetWriter::new(Vec::new(), false, b',').unwrap();
        writer.write(&AugmentedRecord::identity("2", "네, 맞아요")).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(text.ends_with("2,\"네, 맞아요\",\"네, 맞아요\"\n"));
    }
}
