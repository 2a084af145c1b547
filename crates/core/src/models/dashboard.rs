use serde::{Deserialize, Serialize};

use super::asset::AssetSnapshot;
use super::cash::CashSourceRecord;
use super::investment::InvestmentHolding;
use super::wealth::WealthRecord;

/// The main data container: the four record sequences produced by the last
/// successful extraction of each document. Each sequence is replaced as a
/// whole on re-sync, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Wealth history, ascending by date
    pub history: Vec<WealthRecord>,

    /// Cash sources, in sheet order
    pub cash_split: Vec<CashSourceRecord>,

    /// Investment holdings, in sheet order
    pub investments: Vec<InvestmentHolding>,

    /// Asset snapshots, ascending by date
    pub assets: Vec<AssetSnapshot>,
}

impl DashboardData {
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
            && self.cash_split.is_empty()
            && self.investments.is_empty()
            && self.assets.is_empty()
    }
}
