//! Error types for the training-stats pipeline

use thiserror::Error;

/// Errors raised by the dashboard pipeline
#[derive(Debug, Error)]
pub enum StatsError {
    /// Credentials were rejected by the record source
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The record source could not be reached or the sheet/tab is missing
    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),

    /// An expected column is absent from the sheet header
    #[error("Missing expected column '{column}'")]
    Schema { column: String },

    /// Aggregation over zero records
    #[error("No match records available")]
    EmptyDataset,

    /// The spreadsheet locator could not be parsed
    #[error("Invalid spreadsheet locator: {0}")]
    InvalidLocator(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Completion service error (timeout, quota, malformed response)
    #[error("Completion service error: {0}")]
    Completion(#[from] slayer_llm::CompletionError),

    /// Prompt template error
    #[error("Prompt error: {0}")]
    Prompt(#[from] slayer_prompt::PromptError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::Schema {
            column: "Shots Hit".to_string(),
        };
        assert_eq!(err.to_string(), "Missing expected column 'Shots Hit'");

        let err = StatsError::EmptyDataset;
        assert_eq!(err.to_string(), "No match records available");
    }
}
