/// Identification metadata of a UseCase, used for logging and page ids
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "iuran_sync")
    fn usecase_name() -> &'static str;

    /// Human-readable name shown in the UI
    fn display_name() -> &'static str;

    /// Short description of the UseCase
    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u601_iuran_sync"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
