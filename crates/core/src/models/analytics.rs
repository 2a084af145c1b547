use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::timeline::MergedTimelinePoint;

/// Period-over-period net-worth growth for one timeline point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub date: NaiveDate,
    pub net_worth: f64,

    /// Percent change vs. the previous point; 0 for the first point and after a zero net worth
    pub growth: f64,
}

/// Share of each portfolio component in net worth at one point, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPoint {
    pub date: NaiveDate,
    pub investments_pct: f64,
    pub cash_pct: f64,
    pub assets_pct: f64,

    /// Net worth the percentages refer to
    pub total: f64,
}

/// Average value and summed gain/loss for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    /// `YYYY-MM`
    pub month: String,
    pub avg_value: f64,
    pub total_gain: f64,
}

/// Summed period returns for one (year, month) cell of the performance heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub return_pct: f64,
}

/// Headline statistics over the full merged history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WealthSummary {
    pub latest: Option<MergedTimelinePoint>,
    pub previous: Option<MergedTimelinePoint>,

    pub total_gain_loss: f64,
    pub avg_gain_loss: f64,

    /// latest.net_worth − previous.net_worth
    pub change_net_worth: f64,
    /// `change_net_worth` in percent of previous net worth (0 when previous is 0)
    pub change_pct: f64,

    /// Number of points with a strictly positive gain/loss
    pub positive_periods: usize,
    /// `positive_periods` in percent of all points
    pub win_rate: f64,

    /// Population standard deviation of period growth rates
    pub volatility: f64,
    /// Largest peak-to-trough decline of net worth, in percent
    pub max_drawdown: f64,

    pub monthly_performance: Vec<MonthlyPerformance>,
}

/// Absolute period change for the volatility chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub date: NaiveDate,
    pub change: f64,
    pub volatility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeProfitPoint {
    pub date: NaiveDate,
    pub gain_loss: f64,
    pub cumulative: f64,
}

/// Decomposition of net-worth growth into contributions and market gain/loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowBreakdown {
    pub start: f64,
    /// Growth not explained by gain/loss
    pub contributions: f64,
    pub gain_loss: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRatePoint {
    pub date: NaiveDate,
    /// Clamped to `[0, 100]`
    pub savings_rate: f64,
    /// Salary found in the period comment, 0 when absent
    pub salary: f64,
    /// EUR growth minus gain/loss
    pub saved: f64,
}

/// Progress towards one net-worth target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub target: f64,
    pub progress_pct: f64,

    /// `Some(0)` when reached, `None` when the average monthly earning is not positive
    pub months_to_goal: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub start_net_worth: f64,
    pub current_net_worth: f64,
    pub months_elapsed: f64,
    pub average_monthly_earning: f64,
    pub goals: Vec<GoalProgress>,
}

/// How far one holding is from its target allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceEntry {
    pub ticker: String,
    pub current_allocation_pct: f64,
    pub target_allocation_pct: f64,

    /// Positive: buy this much; negative: sell
    pub rebalance_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub total_invested: f64,
    pub total_current_value: f64,
    pub total_profit: f64,
    pub total_profit_pct: f64,
    pub avg_expense_ratio: f64,
    pub rebalancing: Vec<RebalanceEntry>,
}

/// One named slice of a breakdown, for pie-style views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashSplitSummary {
    pub total_eur: f64,
    /// Sorted by value, largest first
    pub slices: Vec<Slice>,
}

/// Diversification sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversificationScore {
    pub asset_types: f64,
    pub currency: f64,
    pub holdings_count: f64,
    pub allocation_balance: f64,
    pub liquidity: f64,
    pub overall: f64,
}
