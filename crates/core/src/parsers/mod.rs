pub mod amount;
pub mod assets;
pub mod cash;
pub mod columns;
pub mod dates;
pub mod investments;
pub mod tokenizer;
pub mod traits;
pub mod wealth;

use tokenizer::tokenize;

/// Header and data lines of a CSV document.
pub(crate) struct CsvTable<'a> {
    pub header: Vec<String>,
    pub rows: Vec<&'a str>,
}

impl<'a> CsvTable<'a> {
    /// Split into non-blank lines; `None` when there is no data line after the header.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());
        let header = tokenize(lines.next()?);
        let rows: Vec<&str> = lines.collect();
        if rows.is_empty() {
            return None;
        }
        Some(Self { header, rows })
    }
}

/// Cell at a resolved column, `None` when the column is unresolved or the row is short.
pub(crate) fn cell(cols: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| cols.get(i)).map(String::as_str)
}
