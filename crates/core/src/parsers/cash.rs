use crate::errors::CoreError;
use crate::models::cash::CashSourceRecord;
use crate::models::document::CsvDocument;

use super::amount::parse_optional_amount;
use super::columns::resolve_column;
use super::tokenizer::{strip_quotes, tokenize};
use super::traits::RecordExtractor;
use super::{cell, CsvTable};

/// Only the first rows of the cash sheet hold sources; below them are notes and totals.
pub const MAX_CASH_ROWS: usize = 16;

/// Default conversion rate for the EUR equivalent.
pub const DEFAULT_RON_PER_EUR: f64 = 5.0;

/// Aggregate row of the sheet; counting it would double the cash total.
const TOTAL_ROW_NAME: &str = "TOTAL CASH";

const NOT_AVAILABLE: &str = "#N/A";

/// Extracts [`CashSourceRecord`]s from the cash split sheet, in sheet order.
#[derive(Debug, Clone, Copy)]
pub struct CashSplitExtractor {
    ron_per_eur: f64,
}

impl CashSplitExtractor {
    pub fn new(ron_per_eur: f64) -> Self {
        Self { ron_per_eur }
    }

    pub fn ron_per_eur(&self) -> f64 {
        self.ron_per_eur
    }
}

impl Default for CashSplitExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_RON_PER_EUR)
    }
}

impl RecordExtractor for CashSplitExtractor {
    type Record = CashSourceRecord;

    fn document(&self) -> CsvDocument {
        CsvDocument::CashSplit
    }

    fn extract(&self, csv_text: &str) -> Result<Vec<CashSourceRecord>, CoreError> {
        let Some(table) = CsvTable::parse(csv_text) else {
            return Ok(Vec::new());
        };

        let source = resolve_column(&table.header, &["sursa"]);
        let ron = resolve_column(&table.header, &["valoare lei"]);
        let eur = resolve_column(&table.header, &["valoare euro"]);
        if source.is_none() || ron.is_none() || eur.is_none() {
            return Err(CoreError::invalid_format(
                CsvDocument::CashSplit,
                "header must contain 'Sursa', 'Valoare lei' and 'Valoare euro' columns",
            ));
        }

        let records = table
            .rows
            .iter()
            .take(MAX_CASH_ROWS)
            .filter_map(|line| {
                let cols = tokenize(line);
                if cols.len() < 2 {
                    return None;
                }

                let name = strip_quotes(cell(&cols, source)?);
                if name.is_empty()
                    || name.to_uppercase().contains(NOT_AVAILABLE)
                    || name.eq_ignore_ascii_case(TOTAL_ROW_NAME)
                {
                    return None;
                }

                let ron_amount = parse_optional_amount(cell(&cols, ron));
                let eur_amount = parse_optional_amount(cell(&cols, eur));
                if ron_amount == 0.0 && eur_amount == 0.0 {
                    return None;
                }

                Some(CashSourceRecord::new(
                    name,
                    ron_amount,
                    eur_amount,
                    self.ron_per_eur,
                ))
            })
            .collect();

        Ok(records)
    }
}
