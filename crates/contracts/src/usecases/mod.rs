pub mod common;
pub mod u601_iuran_sync;
