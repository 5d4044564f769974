use async_trait::async_trait;
use contracts::usecases::common::UseCaseResult;
use contracts::usecases::u601_iuran_sync::SyncPayload;
use serde_json::Value;
use std::sync::Arc;

/// Remote operations of the dues backend used by the sync panel.
///
/// Futures are `?Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait IuranSyncService {
    /// Generate missing iuran records for the current month
    async fn sync_iuran_data(&self) -> UseCaseResult<SyncPayload>;

    /// Generate iuran records for one month, e.g. ("Maret", 2025)
    async fn generate_monthly_iuran(&self, month: &str, year: i32) -> UseCaseResult<SyncPayload>;

    /// Generate iuran records for all twelve months; one result per month
    async fn generate_iuran_for_year(&self, year: i32) -> UseCaseResult<Vec<Value>>;
}

/// Service handle provided through Leptos context
pub type SharedIuranService = Arc<dyn IuranSyncService + Send + Sync>;
