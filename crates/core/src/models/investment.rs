use serde::{Deserialize, Serialize};

/// One tradable position (typically one ETF) from the investments sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentHolding {
    pub name: String,
    pub ticker: String,

    /// Desired weight in the portfolio, in percent
    pub target_allocation_pct: f64,

    /// Total amount paid in
    pub invested_amount: f64,

    /// Market value at export time
    pub current_value: f64,

    /// Profit in currency units
    pub profit_amount: f64,

    /// Profit in percent of `invested_amount`
    pub profit_pct: f64,

    /// Actual weight in the portfolio, in percent
    pub current_allocation_pct: f64,

    /// Total expense ratio, in percent
    pub expense_ratio_pct: f64,
}
