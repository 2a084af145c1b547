use crate::errors::CoreError;
use crate::models::document::CsvDocument;
use crate::models::investment::InvestmentHolding;

use super::amount::parse_optional_amount;
use super::columns::resolve_column;
use super::tokenizer::{strip_quotes, tokenize};
use super::traits::RecordExtractor;
use super::{cell, CsvTable};

/// The portfolio table occupies the first rows of the investments sheet.
pub const MAX_INVESTMENT_ROWS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InvestmentColumns {
    name: usize,
    ticker: usize,
    target_allocation: usize,
    invested: usize,
    current_value: usize,
    profit_amount: usize,
    profit_pct: usize,
    current_allocation: usize,
    expense_ratio: usize,
}

impl InvestmentColumns {
    fn resolve(header: &[String]) -> Result<Self, CoreError> {
        let find = |label: &str, keywords: &[&str]| {
            resolve_column(header, keywords).ok_or_else(|| {
                CoreError::invalid_format(
                    CsvDocument::Investments,
                    format!("missing '{label}' column"),
                )
            })
        };

        Ok(Self {
            name: find("Denumire ETF", &["denumire etf"])?,
            ticker: find("Ticker", &["ticker"])?,
            target_allocation: find("Alocare", &["alocare"])?,
            invested: find("Suma investita", &["suma investita"])?,
            current_value: find("Valoare actuala", &["valoare actuala"])?,
            profit_amount: find("Profit (€)", &["profit (€)", "profit (eur)"])?,
            profit_pct: find("Profit (%)", &["profit (%)"])?,
            current_allocation: find("Alocare actuala", &["alocare actuala"])?,
            expense_ratio: find("TER %", &["ter %"])?,
        })
    }
}

/// A ticker cell that carries no position.
fn is_not_available(ticker: &str) -> bool {
    ticker.is_empty() || ticker.eq_ignore_ascii_case("N/A") || ticker.eq_ignore_ascii_case("#N/A")
}

/// Extracts [`InvestmentHolding`]s from the investments sheet, in sheet order.
///
/// Rows shorter than the header are dropped, as are rows without a ticker.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvestmentExtractor;

impl RecordExtractor for InvestmentExtractor {
    type Record = InvestmentHolding;

    fn document(&self) -> CsvDocument {
        CsvDocument::Investments
    }

    fn extract(&self, csv_text: &str) -> Result<Vec<InvestmentHolding>, CoreError> {
        let Some(table) = CsvTable::parse(csv_text) else {
            return Ok(Vec::new());
        };
        let columns = InvestmentColumns::resolve(&table.header)?;
        let width = table.header.len();

        let holdings = table
            .rows
            .iter()
            .take(MAX_INVESTMENT_ROWS)
            .filter_map(|line| {
                let cols = tokenize(line);
                if cols.len() < 2 || cols.len() < width {
                    return None;
                }

                let ticker = strip_quotes(cell(&cols, Some(columns.ticker))?);
                if is_not_available(ticker) {
                    return None;
                }
                let name = strip_quotes(cell(&cols, Some(columns.name)).unwrap_or_default());
                let amount = |idx: usize| parse_optional_amount(cell(&cols, Some(idx)));

                Some(InvestmentHolding {
                    name: if name.is_empty() { "N/A".to_string() } else { name.to_string() },
                    ticker: ticker.to_string(),
                    target_allocation_pct: amount(columns.target_allocation),
                    invested_amount: amount(columns.invested),
                    current_value: amount(columns.current_value),
                    profit_amount: amount(columns.profit_amount),
                    profit_pct: amount(columns.profit_pct),
                    current_allocation_pct: amount(columns.current_allocation),
                    expense_ratio_pct: amount(columns.expense_ratio),
                })
            })
            .collect();

        Ok(holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_tickers() {
        assert!(is_not_available(""));
        assert!(is_not_available("N/A"));
        assert!(is_not_available("#n/a"));
        assert!(!is_not_available("VWCE"));
    }
}
