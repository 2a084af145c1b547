use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One snapshot of liquid finances on a given date (one row of the history sheet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthRecord {
    /// Snapshot date (daily granularity, parsed from `DD.MM.YYYY`)
    pub date: NaiveDate,

    /// Liquid holdings expressed in RON
    pub ron_amount: f64,

    /// Liquid holdings expressed in EUR; the liquid part of net worth
    pub eur_amount: f64,

    /// Signed profit/loss for the period ending at `date`
    pub gain_loss: f64,

    /// Portion of `eur_amount` held in investments (not enforced)
    pub investments_value: f64,

    /// Portion of `eur_amount` held as cash (not enforced)
    pub cash_value: f64,

    /// Free-text note for the period
    #[serde(default)]
    pub comment: String,
}

impl WealthRecord {
    /// A record carrying only a date and a EUR amount; every other field is zero.
    pub fn new(date: NaiveDate, eur_amount: f64) -> Self {
        Self {
            date,
            ron_amount: 0.0,
            eur_amount,
            gain_loss: 0.0,
            investments_value: 0.0,
            cash_value: 0.0,
            comment: String::new(),
        }
    }
}
