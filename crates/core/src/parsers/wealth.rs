use crate::errors::CoreError;
use crate::models::document::CsvDocument;
use crate::models::wealth::WealthRecord;

use super::amount::parse_optional_amount;
use super::columns::{resolve_column, resolve_column_excluding};
use super::dates::parse_sheet_date;
use super::tokenizer::{strip_quotes, tokenize};
use super::traits::RecordExtractor;
use super::{cell, CsvTable};

/// Resolved column positions of the history sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WealthColumns {
    date: usize,
    eur: usize,
    ron: Option<usize>,
    gain_loss: Option<usize>,
    investments: Option<usize>,
    cash: Option<usize>,
    comment: Option<usize>,
}

impl WealthColumns {
    fn resolve(header: &[String]) -> Result<Self, CoreError> {
        let date = resolve_column(header, &["date", "data"]);
        let eur = resolve_column(header, &["eur"]);

        let (Some(date), Some(eur)) = (date, eur) else {
            return Err(CoreError::invalid_format(
                CsvDocument::History,
                "header must contain a date and a EUR column",
            ));
        };

        Ok(Self {
            date,
            eur,
            ron: resolve_column_excluding(header, &["ron"], &["gain", "loss"]),
            gain_loss: resolve_column(header, &["gain", "loss", "profit"]),
            investments: resolve_column(header, &["investments", "investitii"]),
            cash: resolve_column(header, &["cash", "numerar"]),
            comment: resolve_column(header, &["comment", "comentariu"]),
        })
    }
}

/// Extracts [`WealthRecord`]s from the history sheet, sorted ascending by date.
///
/// Rows whose date is empty or not a valid `DD.MM.YYYY` date are dropped.
/// Records sharing a date keep their file order.
#[derive(Debug, Clone, Copy, Default)]
pub struct WealthExtractor;

impl RecordExtractor for WealthExtractor {
    type Record = WealthRecord;

    fn document(&self) -> CsvDocument {
        CsvDocument::History
    }

    fn extract(&self, csv_text: &str) -> Result<Vec<WealthRecord>, CoreError> {
        let Some(table) = CsvTable::parse(csv_text) else {
            return Ok(Vec::new());
        };
        let columns = WealthColumns::resolve(&table.header)?;

        let mut records: Vec<WealthRecord> = table
            .rows
            .iter()
            .filter_map(|line| {
                let cols = tokenize(line);
                if cols.len() < 2 {
                    return None;
                }
                let date = parse_sheet_date(cell(&cols, Some(columns.date))?)?;

                Some(WealthRecord {
                    date,
                    ron_amount: parse_optional_amount(cell(&cols, columns.ron)),
                    eur_amount: parse_optional_amount(cell(&cols, Some(columns.eur))),
                    gain_loss: parse_optional_amount(cell(&cols, columns.gain_loss)),
                    investments_value: parse_optional_amount(cell(&cols, columns.investments)),
                    cash_value: parse_optional_amount(cell(&cols, columns.cash)),
                    comment: cell(&cols, columns.comment)
                        .map(|c| strip_quotes(c).to_string())
                        .unwrap_or_default(),
                })
            })
            .collect();

        // Stable: duplicate dates stay in file order.
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}
