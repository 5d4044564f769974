use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Success payload of a sync/generate call.
///
/// The backend decides its shape; the panel only looks at optional
/// `error` and `message` fields and an optional `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncPayload(pub Value);

impl SyncPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Wraps the per-month results of a full-year generation
    pub fn year_summary(year: i32, results: Vec<Value>) -> Self {
        Self(json!({
            "data": results,
            "message": format!("Generate iuran untuk tahun {} selesai", year),
        }))
    }

    /// Error reported inside a resolved payload, e.g. `{ "error": "..." }`
    /// or `{ "error": { "message": "..." } }`. Empty strings count as absent.
    pub fn error(&self) -> Option<&str> {
        let error = self.0.get("error")?;
        error
            .as_str()
            .or_else(|| error.get("message").and_then(Value::as_str))
            .filter(|e| !e.is_empty())
    }

    /// Non-empty `message` string
    pub fn message(&self) -> Option<&str> {
        self.0
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Number of processed months when `data` is an array
    pub fn processed_months(&self) -> Option<usize> {
        self.0.get("data").and_then(Value::as_array).map(Vec::len)
    }
}
