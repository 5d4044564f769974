pub mod period;
pub mod request;
pub mod response;

pub use period::{IuranMonth, SelectedPeriod, CANDIDATE_YEARS};
pub use request::{GenerateMonthlyRequest, GenerateYearRequest};
pub use response::SyncPayload;

use crate::usecases::common::UseCaseMetadata;

pub struct IuranSync;

impl UseCaseMetadata for IuranSync {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "iuran_sync"
    }

    fn display_name() -> &'static str {
        "Panel Sinkronisasi Iuran"
    }

    fn description() -> &'static str {
        "Kelola dan sinkronisasi data iuran warga"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(IuranSync::full_name(), "u601_iuran_sync");
    }
}
