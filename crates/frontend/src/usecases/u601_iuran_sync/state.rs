//! Panel state and the shared run protocol of the three sync actions.

use super::service::IuranSyncService;
use contracts::usecases::common::UseCaseResult;
use contracts::usecases::u601_iuran_sync::{IuranMonth, SelectedPeriod, SyncPayload};
use leptos::prelude::*;

/// Shown when a success payload carries no message of its own
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Sinkronisasi berhasil dilakukan";

/// Outcome of the last action
#[derive(Debug, Clone, PartialEq)]
pub enum SyncResult {
    Failed { error: String },
    Succeeded(SyncPayload),
}

impl SyncResult {
    /// True for a failed call and for a resolved payload carrying an `error`
    pub fn is_error(&self) -> bool {
        match self {
            SyncResult::Failed { .. } => true,
            SyncResult::Succeeded(payload) => payload.error().is_some(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_error() {
            "Error"
        } else {
            "Berhasil"
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SyncResult::Failed { error } => error,
            SyncResult::Succeeded(payload) => payload
                .error()
                .or_else(|| payload.message())
                .unwrap_or(DEFAULT_SUCCESS_MESSAGE),
        }
    }

    pub fn processed_months(&self) -> Option<usize> {
        match self {
            SyncResult::Failed { .. } => None,
            SyncResult::Succeeded(payload) => payload.processed_months(),
        }
    }
}

/// User-triggered backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    SyncCurrentMonth,
    GenerateMonth { month: IuranMonth, year: i32 },
    GenerateYear { year: i32 },
}

impl SyncAction {
    pub fn generate_month(period: &SelectedPeriod) -> Self {
        SyncAction::GenerateMonth {
            month: period.month,
            year: period.year,
        }
    }

    pub fn generate_year(period: &SelectedPeriod) -> Self {
        SyncAction::GenerateYear { year: period.year }
    }

    /// Fixed message shown instead of the backend error
    pub fn failure_message(&self) -> &'static str {
        match self {
            SyncAction::SyncCurrentMonth => "Gagal melakukan sinkronisasi",
            SyncAction::GenerateMonth { .. } => "Gagal generate iuran",
            SyncAction::GenerateYear { .. } => "Gagal generate iuran tahunan",
        }
    }

    pub fn label(&self) -> String {
        match self {
            SyncAction::SyncCurrentMonth => "sync current month".to_string(),
            SyncAction::GenerateMonth { month, year } => format!("generate {} {}", month, year),
            SyncAction::GenerateYear { year } => format!("generate year {}", year),
        }
    }
}

/// Where the run protocol writes the loading flag and the result
pub trait SyncPanelSink {
    fn set_loading(&self, loading: bool);
    fn set_result(&self, result: Option<SyncResult>);
}

/// Keeps the loading flag raised for its lifetime
pub struct LoadingGuard<'a, S: SyncPanelSink + ?Sized> {
    sink: &'a S,
}

impl<'a, S: SyncPanelSink + ?Sized> LoadingGuard<'a, S> {
    pub fn acquire(sink: &'a S) -> Self {
        sink.set_loading(true);
        Self { sink }
    }
}

impl<S: SyncPanelSink + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.sink.set_loading(false);
    }
}

/// Runs one action: raise loading, clear the previous result, await the
/// backend, store exactly one result. Loading is lowered when the guard drops,
/// including when this future is dropped mid-flight.
pub async fn run_sync_action<S, Svc>(sink: &S, service: &Svc, action: SyncAction)
where
    S: SyncPanelSink + ?Sized,
    Svc: IuranSyncService + ?Sized,
{
    let _loading = LoadingGuard::acquire(sink);
    sink.set_result(None);

    log::debug!("u601: {} started", action.label());

    let result = match execute(service, action).await {
        Ok(payload) => {
            log::info!("u601: {} finished", action.label());
            SyncResult::Succeeded(payload)
        }
        Err(err) => {
            log::error!("u601: {} failed: {}", action.label(), err);
            SyncResult::Failed {
                error: action.failure_message().to_string(),
            }
        }
    };

    sink.set_result(Some(result));
}

async fn execute<Svc>(service: &Svc, action: SyncAction) -> UseCaseResult<SyncPayload>
where
    Svc: IuranSyncService + ?Sized,
{
    match action {
        SyncAction::SyncCurrentMonth => service.sync_iuran_data().await,
        SyncAction::GenerateMonth { month, year } => {
            service.generate_monthly_iuran(month.name(), year).await
        }
        SyncAction::GenerateYear { year } => {
            let results = service.generate_iuran_for_year(year).await?;
            Ok(SyncPayload::year_summary(year, results))
        }
    }
}

/// Applies the raw values of the month/year controls to `period`.
/// Invalid values are logged and leave the period untouched.
pub fn apply_selection(period: &mut SelectedPeriod, month: &str, year: &str) {
    if let Err(err) = period.select_month(month) {
        log::warn!("u601: month ignored: {}", err);
    }
    match year.trim().parse::<i32>() {
        Ok(year) => {
            if let Err(err) = period.select_year(year) {
                log::warn!("u601: year ignored: {}", err);
            }
        }
        Err(_) => log::warn!("u601: year ignored: '{}' is not a number", year),
    }
}

/// Reactive panel state backed by Leptos signals
#[derive(Clone, Copy)]
pub struct SignalSink {
    pub is_loading: RwSignal<bool>,
    pub result: RwSignal<Option<SyncResult>>,
}

impl SignalSink {
    pub fn new() -> Self {
        Self {
            is_loading: RwSignal::new(false),
            result: RwSignal::new(None),
        }
    }
}

impl SyncPanelSink for SignalSink {
    fn set_loading(&self, loading: bool) {
        self.is_loading.set(loading);
    }

    fn set_result(&self, result: Option<SyncResult>) {
        self.result.set(result);
    }
}
