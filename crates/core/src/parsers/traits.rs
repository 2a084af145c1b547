use crate::errors::CoreError;
use crate::models::document::CsvDocument;

/// Turns the raw CSV text of one spreadsheet export into typed records.
///
/// Each document has one implementation. Header problems are fatal and
/// surface as [`CoreError::InvalidFormat`]; defective rows are dropped
/// silently. A document with fewer than two non-empty lines extracts to an
/// empty sequence.
pub trait RecordExtractor {
    type Record;

    /// Which document this extractor understands (used in error messages).
    fn document(&self) -> CsvDocument;

    fn extract(&self, csv_text: &str) -> Result<Vec<Self::Record>, CoreError>;
}
