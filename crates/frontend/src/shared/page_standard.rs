//! Page category constants and page id helpers.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"u601_iuran_sync--usecase"`) and a `data-page-category`.

use contracts::usecases::common::UseCaseMetadata;

/// Use-case action page (sync, generate, imports).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Free-form page exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Page id of a UseCase page, e.g. `"u601_iuran_sync--usecase"`.
pub fn usecase_page_id<M: UseCaseMetadata>() -> String {
    format!("{}--{}", M::full_name(), PAGE_CAT_USECASE)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_iuran_sync::IuranSync;

    #[test]
    fn test_usecase_page_id() {
        let id = usecase_page_id::<IuranSync>();
        assert_eq!(id, "u601_iuran_sync--usecase");
        assert!(is_valid_page_id(&id));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("u601_iuran_sync"));
        assert!(!is_valid_page_id("--usecase"));
        assert!(!is_valid_page_id("u601--"));
    }
}
