use crate::models::asset::{AssetBreakdown, AssetSnapshot};
use crate::models::timeline::MergedTimelinePoint;
use crate::models::wealth::WealthRecord;

/// Builds the unified net-worth timeline from the history and asset series.
///
/// The merge is a forward-fill join: one point per distinct date in either
/// series, each carrying the most recent history record and asset snapshot
/// seen so far (zeros before a series' first observation).
///
/// Single pass over both series after a stable sort: O(n log n + m log m).
pub struct TimelineService;

impl TimelineService {
    pub fn new() -> Self {
        Self
    }

    /// Merge both series into one ascending timeline.
    ///
    /// When a series has several entries for the same date, the last one in
    /// input order wins.
    pub fn merge(
        &self,
        wealth: &[WealthRecord],
        assets: &[AssetSnapshot],
    ) -> Vec<MergedTimelinePoint> {
        let mut wealth_sorted: Vec<&WealthRecord> = wealth.iter().collect();
        wealth_sorted.sort_by_key(|r| r.date);
        let mut assets_sorted: Vec<&AssetSnapshot> = assets.iter().collect();
        assets_sorted.sort_by_key(|s| s.date);

        let mut timeline = Vec::with_capacity(wealth_sorted.len() + assets_sorted.len());
        let mut last_wealth: Option<&WealthRecord> = None;
        let mut last_assets: Option<&AssetSnapshot> = None;
        let (mut wi, mut ai) = (0, 0);

        loop {
            let date = match (wealth_sorted.get(wi), assets_sorted.get(ai)) {
                (Some(w), Some(a)) => w.date.min(a.date),
                (Some(w), None) => w.date,
                (None, Some(a)) => a.date,
                (None, None) => break,
            };

            while let Some(record) = wealth_sorted.get(wi).filter(|r| r.date == date) {
                last_wealth = Some(*record);
                wi += 1;
            }
            while let Some(snapshot) = assets_sorted.get(ai).filter(|s| s.date == date) {
                last_assets = Some(*snapshot);
                ai += 1;
            }

            timeline.push(Self::point(date, last_wealth, last_assets));
        }

        timeline
    }

    fn point(
        date: chrono::NaiveDate,
        wealth: Option<&WealthRecord>,
        assets: Option<&AssetSnapshot>,
    ) -> MergedTimelinePoint {
        let eur_amount = wealth.map_or(0.0, |w| w.eur_amount);
        let assets_total = assets.map_or(0.0, |a| a.total);

        MergedTimelinePoint {
            date,
            ron_amount: wealth.map_or(0.0, |w| w.ron_amount),
            eur_amount,
            gain_loss: wealth.map_or(0.0, |w| w.gain_loss),
            investments_value: wealth.map_or(0.0, |w| w.investments_value),
            cash_value: wealth.map_or(0.0, |w| w.cash_value),
            comment: wealth.map(|w| w.comment.clone()).unwrap_or_default(),
            assets_total,
            assets_breakdown: assets
                .map(|a| a.values_by_asset_name.clone())
                .unwrap_or_else(AssetBreakdown::new),
            net_worth: eur_amount + assets_total,
        }
    }
}

impl Default for TimelineService {
    fn default() -> Self {
        Self::new()
    }
}
