use super::api::HttpIuranService;
use super::service::SharedIuranService;
use super::state::{apply_selection, run_sync_action, SignalSink, SyncAction, SyncResult};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{usecase_page_id, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_iuran_sync::{
    IuranMonth, IuranSync, SelectedPeriod, CANDIDATE_YEARS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

const INFO_ITEMS: [&str; 4] = [
    "Sinkronisasi akan membuat iuran untuk semua warga aktif",
    "Data yang sudah ada tidak akan ditimpa",
    "Tarif iuran diambil dari pengaturan sistem",
    "Summary akan diperbarui otomatis setelah sinkronisasi",
];

#[component]
pub fn IuranSyncPanel() -> impl IntoView {
    let service: SharedIuranService = use_context::<SharedIuranService>()
        .unwrap_or_else(|| Arc::new(HttpIuranService));
    let service = StoredValue::new(service);

    let sink = SignalSink::new();
    let current = SelectedPeriod::current();
    let period = RwSignal::new(current);

    // Raw values bound to the selects
    let month_value = RwSignal::new(current.month.name().to_string());
    let year_value = RwSignal::new(current.year.to_string());

    let dispatch = move |action: SyncAction| {
        let service = service.get_value();
        spawn_local(async move {
            run_sync_action(&sink, service.as_ref(), action).await;
        });
    };

    let read_period = move || {
        let mut selected = period.get_untracked();
        apply_selection(
            &mut selected,
            &month_value.get_untracked(),
            &year_value.get_untracked(),
        );
        period.set(selected);
        selected
    };

    let on_sync_current = move |_| dispatch(SyncAction::SyncCurrentMonth);
    let on_generate_month = move |_| dispatch(SyncAction::generate_month(&read_period()));
    let on_generate_year = move |_| dispatch(SyncAction::generate_year(&read_period()));

    let is_loading = sink.is_loading;
    let disabled = Signal::derive(move || is_loading.get());
    let page_id = usecase_page_id::<IuranSync>();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_USECASE>
            <div class="card sync-panel">
                <div class="sync-panel__header">
                    <div class="sync-panel__badge">{icon("settings")}</div>
                    <div>
                        <h3 class="sync-panel__title">{IuranSync::display_name()}</h3>
                        <p class="sync-panel__subtitle">{IuranSync::description()}</p>
                    </div>
                </div>

                // Quick sync
                <section class="sync-panel__section">
                    <h4 class="sync-panel__section-title">"Sinkronisasi Cepat"</h4>
                    <div class="sync-panel__quick">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_sync_current
                            disabled=disabled
                        >
                            <span class=move || if is_loading.get() { "icon icon--spin" } else { "icon" }>
                                {icon("refresh")}
                            </span>
                            {move || if is_loading.get() {
                                "Sedang Sinkronisasi..."
                            } else {
                                "Sinkronisasi Bulan Ini"
                            }}
                        </Button>
                    </div>
                    <p class="sync-panel__hint">
                        {format!("Generate iuran untuk bulan {}", current.label())}
                    </p>
                </section>

                // Manual generation
                <section class="sync-panel__section">
                    <h4 class="sync-panel__section-title">"Generate Manual"</h4>
                    <div class="sync-panel__grid">
                        <Select value=month_value>
                            {IuranMonth::ALL
                                .iter()
                                .map(|month| view! { <option value=month.name()>{month.name()}</option> })
                                .collect_view()}
                        </Select>
                        <Select value=year_value>
                            {CANDIDATE_YEARS
                                .iter()
                                .map(|year| view! { <option value=year.to_string()>{year.to_string()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="sync-panel__grid">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_generate_month
                            disabled=disabled
                        >
                            <span class="icon">{icon("calendar")}</span>
                            "Generate Bulan"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=on_generate_year
                            disabled=disabled
                        >
                            <span class="icon">{icon("calendar")}</span>
                            "Generate Tahun"
                        </Button>
                    </div>
                    <Show when=move || is_loading.get()>
                        <div class="sync-panel__spinner">
                            <Spinner size=SpinnerSize::Small />
                        </div>
                    </Show>
                </section>

                {move || sink.result.get().map(|result| view! { <SyncResultPanel result=result /> })}

                <div class="sync-panel__info">
                    <h5 class="sync-panel__info-title">"Informasi Penting"</h5>
                    <ul class="sync-panel__info-list">
                        {INFO_ITEMS
                            .iter()
                            .map(|item| view! { <li>{format!("• {}", item)}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </PageFrame>
    }
}

/// Error or success panel for the last action
#[component]
fn SyncResultPanel(result: SyncResult) -> impl IntoView {
    let (intent, icon_name) = if result.is_error() {
        (MessageBarIntent::Error, "alert-circle")
    } else {
        (MessageBarIntent::Success, "check-circle")
    };
    let title = result.title();
    let message = result.message().to_string();
    let processed = result.processed_months();

    view! {
        <MessageBar intent=intent>
            <div class="sync-result">
                <span class="icon">{icon(icon_name)}</span>
                <div class="sync-result__body">
                    <h5 class="sync-result__title">{title}</h5>
                    <p class="sync-result__message">{message}</p>
                    {processed.map(|count| view! {
                        <p class="sync-result__count">
                            {format!("Data yang diproses: {} bulan", count)}
                        </p>
                    })}
                </div>
            </div>
        </MessageBar>
    }
}
