pub mod api;
pub mod service;
pub mod state;
pub mod view;

pub use api::HttpIuranService;
pub use service::{IuranSyncService, SharedIuranService};
pub use view::IuranSyncPanel;
