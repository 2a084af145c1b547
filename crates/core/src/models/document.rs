use serde::{Deserialize, Serialize};

/// The four spreadsheet exports the dashboard is built from.
///
/// Order of [`CsvDocument::ALL`] is the order in which a sync processes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CsvDocument {
    /// Dated snapshots of liquid wealth (RON, EUR, gain/loss, investments, cash)
    History,
    /// Cash broken down by source, in RON and EUR
    CashSplit,
    /// ETF holdings with target vs. current allocation
    Investments,
    /// Dated snapshots of physical/other asset values
    Assets,
}

impl CsvDocument {
    pub const ALL: [CsvDocument; 4] = [
        CsvDocument::History,
        CsvDocument::CashSplit,
        CsvDocument::Investments,
        CsvDocument::Assets,
    ];

    /// 1-based position of this document within a sync run.
    pub fn stage(self) -> usize {
        match self {
            CsvDocument::History => 1,
            CsvDocument::CashSplit => 2,
            CsvDocument::Investments => 3,
            CsvDocument::Assets => 4,
        }
    }
}

impl std::fmt::Display for CsvDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvDocument::History => write!(f, "History"),
            CsvDocument::CashSplit => write!(f, "Cash Split"),
            CsvDocument::Investments => write!(f, "Investments"),
            CsvDocument::Assets => write!(f, "Assets"),
        }
    }
}
