//! Tabular dataset input and output.
//!
//! The source table carries at least an `ID` and an `output` column; the
//! augmented table is written as `original_id,error,original`. Both are UTF-8
//! CSV.

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::*;
pub use record::*;
pub use writer::*;

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
