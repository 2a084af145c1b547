use serde::{Deserialize, Serialize};

/// One liquidity source's split across RON and EUR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashSourceRecord {
    /// Label of the source (bank, wallet, envelope...)
    pub source_name: String,

    /// Amount held in RON
    pub ron_amount: f64,

    /// Amount held in EUR
    pub eur_amount: f64,

    /// `eur_amount + ron_amount / ron_per_eur`, at the fixed rate used during extraction
    pub total_eur_equivalent: f64,
}

impl CashSourceRecord {
    pub fn new(
        source_name: impl Into<String>,
        ron_amount: f64,
        eur_amount: f64,
        ron_per_eur: f64,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            ron_amount,
            eur_amount,
            total_eur_equivalent: eur_amount + ron_amount / ron_per_eur,
        }
    }
}
