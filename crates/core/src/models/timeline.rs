use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::asset::AssetBreakdown;

/// One point on the unified net-worth timeline.
///
/// Wealth fields are forward-filled from the most recent history record,
/// asset fields from the most recent asset snapshot. Derived view only;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTimelinePoint {
    pub date: NaiveDate,

    pub ron_amount: f64,
    pub eur_amount: f64,
    pub gain_loss: f64,
    pub investments_value: f64,
    pub cash_value: f64,
    pub comment: String,

    /// Total of the forward-filled asset snapshot
    pub assets_total: f64,

    /// Breakdown of the forward-filled asset snapshot
    pub assets_breakdown: AssetBreakdown,

    /// `eur_amount + assets_total`
    pub net_worth: f64,
}
