pub mod errors;
pub mod models;
pub mod parsers;
pub mod services;
pub mod sources;
pub mod storage;

use models::{
    analytics::{
        AllocationPoint, CashFlowBreakdown, CashSplitSummary, CumulativeProfitPoint,
        DiversificationScore, GoalProjection, GrowthPoint, InvestmentSummary, MonthlyReturn,
        SavingsRatePoint, Slice, VolatilityPoint, WealthSummary,
    },
    asset::AssetSnapshot,
    cash::CashSourceRecord,
    dashboard::DashboardData,
    document::CsvDocument,
    investment::InvestmentHolding,
    settings::TrackerConfig,
    timeline::MergedTimelinePoint,
    wealth::WealthRecord,
};
use services::{
    analytics_service::AnalyticsService,
    sync_service::{SyncReport, SyncService, SyncStatus},
    timeline_service::TimelineService,
};
use sources::traits::CsvSource;
use storage::{
    manager::StorageManager,
    session::{Session, SessionGate},
    traits::KeyValueStore,
};

use errors::CoreError;

/// Main entry point for the Wealth Tracker core library.
///
/// Holds the current record sequences, the storage they persist to and the
/// services that derive the dashboard views from them. The merged timeline is
/// recomputed on demand and never stored.
#[must_use]
pub struct WealthTracker<S: KeyValueStore> {
    config: TrackerConfig,
    data: DashboardData,
    storage: StorageManager<S>,
    session_gate: SessionGate,
    sync_service: SyncService,
    timeline_service: TimelineService,
    analytics_service: AnalyticsService,
}

impl<S: KeyValueStore> std::fmt::Debug for WealthTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WealthTracker")
            .field("history", &self.data.history.len())
            .field("cash_split", &self.data.cash_split.len())
            .field("investments", &self.data.investments.len())
            .field("assets", &self.data.assets.len())
            .finish()
    }
}

impl<S: KeyValueStore> WealthTracker<S> {
    /// Open a tracker over `store`, loading whatever was persisted before.
    pub fn open(store: S, config: TrackerConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let session_gate = SessionGate::from_config(&config)?;
        let storage = StorageManager::new(store, config.storage_keys.clone());
        let data = storage.load_dashboard();
        Ok(Self {
            sync_service: SyncService::new(config.ron_per_eur),
            timeline_service: TimelineService::new(),
            analytics_service: AnalyticsService::new(),
            config,
            data,
            storage,
            session_gate,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn storage(&self) -> &StorageManager<S> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut StorageManager<S> {
        &mut self.storage
    }

    // ── Sync & Import ───────────────────────────────────────────────

    /// Fetch, extract and persist all four documents in order.
    ///
    /// On failure the error names the stage; documents synced before it keep
    /// their new data, the rest keep their previous data.
    pub async fn sync(&mut self, source: &dyn CsvSource) -> Result<SyncReport, CoreError> {
        self.sync_with_progress(source, |_| {}).await
    }

    /// [`WealthTracker::sync`] with a progress callback.
    pub async fn sync_with_progress<F>(
        &mut self,
        source: &dyn CsvSource,
        on_status: F,
    ) -> Result<SyncReport, CoreError>
    where
        F: FnMut(&SyncStatus),
    {
        self.sync_service
            .sync(source, &mut self.storage, &mut self.data, on_status)
            .await
    }

    /// Replace one document from CSV text already at hand.
    /// Returns the number of records kept.
    pub fn import_csv(&mut self, document: CsvDocument, csv_text: &str) -> Result<usize, CoreError> {
        self.sync_service
            .import(document, csv_text, &mut self.storage, &mut self.data)
    }

    /// Drop all data, in memory and in storage.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.storage.clear()?;
        self.data = DashboardData::default();
        Ok(())
    }

    // ── Session ─────────────────────────────────────────────────────

    pub fn session_gate(&self) -> &SessionGate {
        &self.session_gate
    }

    /// Remember a successful login at `now` for the configured duration.
    pub fn start_session(&mut self, now: chrono::DateTime<chrono::Utc>) -> Result<Session, CoreError> {
        self.session_gate.create(self.storage.store_mut(), now)
    }

    pub fn is_session_active(&mut self, now: chrono::DateTime<chrono::Utc>) -> Result<bool, CoreError> {
        self.session_gate.is_active(self.storage.store_mut(), now)
    }

    /// Fails with [`CoreError::SessionExpired`] unless a session is active at `now`.
    pub fn require_session(&mut self, now: chrono::DateTime<chrono::Utc>) -> Result<(), CoreError> {
        self.session_gate.require(self.storage.store_mut(), now)
    }

    pub fn end_session(&mut self) -> Result<(), CoreError> {
        self.session_gate.end(self.storage.store_mut())
    }

    // ── Records ─────────────────────────────────────────────────────

    #[must_use]
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    #[must_use]
    pub fn history(&self) -> &[WealthRecord] {
        &self.data.history
    }

    #[must_use]
    pub fn cash_split(&self) -> &[CashSourceRecord] {
        &self.data.cash_split
    }

    #[must_use]
    pub fn investments(&self) -> &[InvestmentHolding] {
        &self.data.investments
    }

    #[must_use]
    pub fn assets(&self) -> &[AssetSnapshot] {
        &self.data.assets
    }

    /// `true` once there is wealth history to build the dashboard from.
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.data.history.is_empty()
    }

    // ── Timeline & Analytics ────────────────────────────────────────

    /// Forward-filled net-worth timeline over history and asset dates.
    #[must_use]
    pub fn merged_timeline(&self) -> Vec<MergedTimelinePoint> {
        self.timeline_service
            .merge(&self.data.history, &self.data.assets)
    }

    #[must_use]
    pub fn growth_series(&self) -> Vec<GrowthPoint> {
        self.analytics_service
            .growth_series(&self.merged_timeline())
    }

    #[must_use]
    pub fn allocation_series(&self) -> Vec<AllocationPoint> {
        self.analytics_service
            .allocation_series(&self.merged_timeline())
    }

    #[must_use]
    pub fn wealth_summary(&self) -> WealthSummary {
        self.analytics_service
            .wealth_summary(&self.merged_timeline())
    }

    #[must_use]
    pub fn volatility_series(&self) -> Vec<VolatilityPoint> {
        self.analytics_service
            .volatility_series(&self.merged_timeline())
    }

    #[must_use]
    pub fn monthly_returns(&self) -> Vec<MonthlyReturn> {
        self.analytics_service
            .monthly_returns(&self.merged_timeline())
    }

    #[must_use]
    pub fn cash_flow_breakdown(&self) -> Option<CashFlowBreakdown> {
        self.analytics_service
            .cash_flow_breakdown(&self.merged_timeline())
    }

    /// Progress towards the configured net-worth targets.
    #[must_use]
    pub fn goal_projection(&self) -> Option<GoalProjection> {
        self.analytics_service
            .goal_projection(&self.merged_timeline(), &self.config.goal_targets)
    }

    #[must_use]
    pub fn cumulative_profit(&self) -> Vec<CumulativeProfitPoint> {
        self.analytics_service.cumulative_profit(&self.data.history)
    }

    #[must_use]
    pub fn savings_rate_series(&self) -> Vec<SavingsRatePoint> {
        self.analytics_service
            .savings_rate_series(&self.data.history)
    }

    #[must_use]
    pub fn investment_summary(&self) -> Option<InvestmentSummary> {
        self.analytics_service
            .investment_summary(&self.data.investments)
    }

    #[must_use]
    pub fn cash_split_summary(&self) -> CashSplitSummary {
        self.analytics_service
            .cash_split_summary(&self.data.cash_split)
    }

    #[must_use]
    pub fn asset_slices(&self) -> Vec<Slice> {
        self.analytics_service.asset_slices(&self.data.assets)
    }

    /// Diversification of the latest timeline point; `None` without any data.
    #[must_use]
    pub fn diversification_score(&self) -> Option<DiversificationScore> {
        let timeline = self.merged_timeline();
        let latest = timeline.last()?;
        Some(
            self.analytics_service
                .diversification_score(latest, &self.data.investments),
        )
    }
}
