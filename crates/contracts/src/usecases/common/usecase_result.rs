use serde::{Deserialize, Serialize};

/// Result of a UseCase call
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Error of a UseCase call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Failure reported by (or while talking to) the remote dues backend
    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_details() {
        let err = UseCaseError::validation("Tahun tidak tersedia");
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] Tahun tidak tersedia");
    }

    #[test]
    fn test_display_with_details() {
        let err = UseCaseError::external("HTTP error").with_details("status 502");
        assert_eq!(err.to_string(), "[EXTERNAL_ERROR] HTTP error: status 502");
    }
}
