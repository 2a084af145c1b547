use crate::errors::CoreError;
use crate::models::dashboard::DashboardData;
use crate::models::document::CsvDocument;
use crate::parsers::assets::AssetExtractor;
use crate::parsers::cash::CashSplitExtractor;
use crate::parsers::investments::InvestmentExtractor;
use crate::parsers::traits::RecordExtractor;
use crate::parsers::wealth::WealthExtractor;
use crate::sources::traits::CsvSource;
use crate::storage::manager::StorageManager;
use crate::storage::traits::KeyValueStore;

/// Progress of a sync run, in the order it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncStatus {
    Downloading(CsvDocument),
    Processing(CsvDocument),
    Completed,
    Failed(String),
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Downloading(doc) => write!(f, "{}/4: Downloading {doc}...", doc.stage()),
            SyncStatus::Processing(doc) => write!(f, "{}/4: Processing {doc}...", doc.stage()),
            SyncStatus::Completed => write!(f, "Sync completed successfully"),
            SyncStatus::Failed(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// Record counts of a successful sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub history: usize,
    pub cash_split: usize,
    pub investments: usize,
    pub assets: usize,
}

/// Re-imports all four documents: fetch, extract, persist, replace.
///
/// Documents are processed one after another in [`CsvDocument::ALL`] order.
/// The first failure stops the run; documents already replaced in this run
/// stay replaced and later ones keep their previous data.
pub struct SyncService {
    history: WealthExtractor,
    cash_split: CashSplitExtractor,
    investments: InvestmentExtractor,
    assets: AssetExtractor,
}

impl SyncService {
    pub fn new(ron_per_eur: f64) -> Self {
        Self {
            history: WealthExtractor,
            cash_split: CashSplitExtractor::new(ron_per_eur),
            investments: InvestmentExtractor,
            assets: AssetExtractor,
        }
    }

    /// Run a full sync, reporting progress to `on_status`.
    pub async fn sync<S, F>(
        &self,
        source: &dyn CsvSource,
        storage: &mut StorageManager<S>,
        data: &mut DashboardData,
        mut on_status: F,
    ) -> Result<SyncReport, CoreError>
    where
        S: KeyValueStore,
        F: FnMut(&SyncStatus),
    {
        let mut notify = |status: SyncStatus| {
            log::info!("{status}");
            on_status(&status);
        };

        for document in CsvDocument::ALL {
            notify(SyncStatus::Downloading(document));
            let result = match source.fetch(document).await {
                Ok(csv_text) => {
                    notify(SyncStatus::Processing(document));
                    self.import(document, &csv_text, storage, data)
                }
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                log::error!("Sync from {} failed at {document}: {e}", source.name());
                let err = CoreError::SyncFailed {
                    stage: document,
                    source: Box::new(e),
                };
                notify(SyncStatus::Failed(err.to_string()));
                return Err(err);
            }
        }

        notify(SyncStatus::Completed);
        Ok(SyncReport {
            history: data.history.len(),
            cash_split: data.cash_split.len(),
            investments: data.investments.len(),
            assets: data.assets.len(),
        })
    }

    /// Extract one document, persist it and replace it in `data`.
    ///
    /// Nothing is persisted or replaced when extraction fails.
    pub fn import<S: KeyValueStore>(
        &self,
        document: CsvDocument,
        csv_text: &str,
        storage: &mut StorageManager<S>,
        data: &mut DashboardData,
    ) -> Result<usize, CoreError> {
        match document {
            CsvDocument::History => {
                let records = self.history.extract(csv_text)?;
                storage.save_history(&records)?;
                data.history = records;
                Ok(data.history.len())
            }
            CsvDocument::CashSplit => {
                let records = self.cash_split.extract(csv_text)?;
                storage.save_cash_split(&records)?;
                data.cash_split = records;
                Ok(data.cash_split.len())
            }
            CsvDocument::Investments => {
                let holdings = self.investments.extract(csv_text)?;
                storage.save_investments(&holdings)?;
                data.investments = holdings;
                Ok(data.investments.len())
            }
            CsvDocument::Assets => {
                let snapshots = self.assets.extract(csv_text)?;
                storage.save_assets(&snapshots)?;
                data.assets = snapshots;
                Ok(data.assets.len())
            }
        }
    }
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new(crate::parsers::cash::DEFAULT_RON_PER_EUR)
    }
}
