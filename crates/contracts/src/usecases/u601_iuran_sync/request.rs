use serde::{Deserialize, Serialize};

/// Body of the "generate monthly iuran" call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMonthlyRequest {
    /// Localized month name, e.g. "Maret"
    pub month: String,
    pub year: i32,
}

/// Body of the "generate iuran for year" call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateYearRequest {
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monthly_request_body() {
        let body = GenerateMonthlyRequest {
            month: "Maret".to_string(),
            year: 2025,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "month": "Maret", "year": 2025 })
        );
    }
}
