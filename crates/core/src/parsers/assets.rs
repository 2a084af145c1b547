use crate::errors::CoreError;
use crate::models::asset::{AssetBreakdown, AssetSnapshot};
use crate::models::document::CsvDocument;

use super::amount::parse_optional_amount;
use super::columns::resolve_exact_column;
use super::dates::parse_sheet_date;
use super::tokenizer::{strip_quotes, tokenize};
use super::traits::RecordExtractor;
use super::{cell, CsvTable};

/// Extracts [`AssetSnapshot`]s from the assets sheet, sorted ascending by date.
///
/// The `Data` column holds the date; every other column is one named asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetExtractor;

impl RecordExtractor for AssetExtractor {
    type Record = AssetSnapshot;

    fn document(&self) -> CsvDocument {
        CsvDocument::Assets
    }

    fn extract(&self, csv_text: &str) -> Result<Vec<AssetSnapshot>, CoreError> {
        let Some(table) = CsvTable::parse(csv_text) else {
            return Ok(Vec::new());
        };

        let asset_names: Vec<String> = table
            .header
            .iter()
            .map(|h| strip_quotes(h).to_string())
            .collect();
        let date_idx = resolve_exact_column(&asset_names, "data").ok_or_else(|| {
            CoreError::invalid_format(CsvDocument::Assets, "missing 'Data' column")
        })?;

        let mut snapshots: Vec<AssetSnapshot> = table
            .rows
            .iter()
            .filter_map(|line| {
                let cols = tokenize(line);
                if cols.len() < 2 {
                    return None;
                }
                let date = parse_sheet_date(cell(&cols, Some(date_idx))?)?;

                let breakdown: AssetBreakdown = asset_names
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != date_idx)
                    .map(|(idx, name)| {
                        (name.as_str(), parse_optional_amount(cell(&cols, Some(idx))))
                    })
                    .collect();

                Some(AssetSnapshot::new(date, breakdown))
            })
            .collect();

        snapshots.sort_by_key(|s| s.date);
        Ok(snapshots)
    }
}
