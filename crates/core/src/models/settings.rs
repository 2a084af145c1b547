use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use super::document::CsvDocument;

/// Storage key per persisted record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub history: String,
    pub cash_split: String,
    pub investments: String,
    pub assets: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            history: "wealthTrackerData".to_string(),
            cash_split: "wealthTrackerCashSplit".to_string(),
            investments: "wealthTrackerInvestmentData".to_string(),
            assets: "wealthAssetsData".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn for_document(&self, document: CsvDocument) -> &str {
        match document {
            CsvDocument::History => &self.history,
            CsvDocument::CashSplit => &self.cash_split,
            CsvDocument::Investments => &self.investments,
            CsvDocument::Assets => &self.assets,
        }
    }
}

/// Endpoint path per CSV document, relative to `TrackerConfig::base_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub history: String,
    pub cash_split: String,
    pub investments: String,
    pub assets: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            history: "/.netlify/functions/history".to_string(),
            cash_split: "/.netlify/functions/cash".to_string(),
            investments: "/.netlify/functions/investments".to_string(),
            assets: "/.netlify/functions/assets".to_string(),
        }
    }
}

impl Endpoints {
    pub fn for_document(&self, document: CsvDocument) -> &str {
        match document {
            CsvDocument::History => &self.history,
            CsvDocument::CashSplit => &self.cash_split,
            CsvDocument::Investments => &self.investments,
            CsvDocument::Assets => &self.assets,
        }
    }
}

/// Longest accepted login session: one year.
pub const MAX_SESSION_DURATION_MINUTES: i64 = 60 * 24 * 365;

/// Runtime configuration. Every field has a default, so a partial JSON
/// document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Storage key holding the login session
    pub session_key: String,

    /// How long a login session stays valid
    pub session_duration_minutes: i64,

    pub storage_keys: StorageKeys,

    /// Fixed conversion rate used for the cash split's EUR equivalent
    pub ron_per_eur: f64,

    /// Origin the CSV endpoints are served from (e.g. "https://example.netlify.app")
    pub base_url: String,

    pub endpoints: Endpoints,

    pub request_timeout_secs: u64,

    /// Net-worth targets tracked by the goal projection, in EUR
    pub goal_targets: Vec<f64>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            session_key: "wealthTrackerSession".to_string(),
            session_duration_minutes: 30,
            storage_keys: StorageKeys::default(),
            ron_per_eur: 5.0,
            base_url: String::new(),
            endpoints: Endpoints::default(),
            request_timeout_secs: 30,
            goal_targets: vec![250_000.0, 500_000.0, 750_000.0, 1_000_000.0],
        }
    }
}

impl TrackerConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.ron_per_eur.is_finite() || self.ron_per_eur <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "ron_per_eur must be a positive number, got {}",
                self.ron_per_eur
            )));
        }
        if self.session_duration_minutes <= 0
            || self.session_duration_minutes > MAX_SESSION_DURATION_MINUTES
        {
            return Err(CoreError::ValidationError(format!(
                "session_duration_minutes must be between 1 and {MAX_SESSION_DURATION_MINUTES}, got {}",
                self.session_duration_minutes
            )));
        }
        Ok(())
    }

    /// Full URL for a document's CSV endpoint.
    pub fn url_for(&self, document: CsvDocument) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.endpoints.for_document(document)
        )
    }
}
