use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::asset::AssetSnapshot;
use crate::models::cash::CashSourceRecord;
use crate::models::dashboard::DashboardData;
use crate::models::document::CsvDocument;
use crate::models::investment::InvestmentHolding;
use crate::models::settings::StorageKeys;
use crate::models::wealth::WealthRecord;

use super::traits::KeyValueStore;

/// Saves and loads the record sequences as JSON blobs in a [`KeyValueStore`].
///
/// Loading is lenient: a missing key is an empty sequence, and so is a blob
/// that no longer decodes (logged at `warn`). Saving replaces the whole
/// sequence under its key.
pub struct StorageManager<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> StorageManager<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── Generic sequences ───────────────────────────────────────────

    /// Load a JSON array stored under `key`.
    pub fn load_sequence<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Error reading storage key {key}: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Discarding unreadable data under storage key {key}: {e}");
            Vec::new()
        })
    }

    /// Serialize `items` as a JSON array under `key`, replacing what was there.
    pub fn save_sequence<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), CoreError> {
        let json = serde_json::to_string(items).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize data for key {key}: {e}"))
        })?;
        self.store.set(key, json)
    }

    // ── Typed documents ─────────────────────────────────────────────

    pub fn load_dashboard(&self) -> DashboardData {
        DashboardData {
            history: self.load_sequence(&self.keys.history),
            cash_split: self.load_sequence(&self.keys.cash_split),
            investments: self.load_sequence(&self.keys.investments),
            assets: self.load_sequence(&self.keys.assets),
        }
    }

    pub fn save_dashboard(&mut self, data: &DashboardData) -> Result<(), CoreError> {
        self.save_history(&data.history)?;
        self.save_cash_split(&data.cash_split)?;
        self.save_investments(&data.investments)?;
        self.save_assets(&data.assets)
    }

    pub fn save_history(&mut self, records: &[WealthRecord]) -> Result<(), CoreError> {
        let key = self.keys.history.clone();
        self.save_sequence(&key, records)
    }

    pub fn save_cash_split(&mut self, records: &[CashSourceRecord]) -> Result<(), CoreError> {
        let key = self.keys.cash_split.clone();
        self.save_sequence(&key, records)
    }

    pub fn save_investments(&mut self, holdings: &[InvestmentHolding]) -> Result<(), CoreError> {
        let key = self.keys.investments.clone();
        self.save_sequence(&key, holdings)
    }

    pub fn save_assets(&mut self, snapshots: &[AssetSnapshot]) -> Result<(), CoreError> {
        let key = self.keys.assets.clone();
        self.save_sequence(&key, snapshots)
    }

    /// Remove every persisted document.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        for document in CsvDocument::ALL {
            let key = self.keys.for_document(document).to_string();
            self.store.remove(&key)?;
        }
        Ok(())
    }
}
