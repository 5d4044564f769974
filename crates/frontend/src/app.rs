use crate::usecases::u601_iuran_sync::{HttpIuranService, IuranSyncPanel, SharedIuranService};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // Backend client for the sync panel; swap it here to point at a different backend.
    let service: SharedIuranService = Arc::new(HttpIuranService);
    provide_context(service);

    view! { <IuranSyncPanel /> }
}
