//! Directory API-specific error types.

/// Errors that can occur during employee directory API operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Configured base URL cannot be extended with a path
    #[error("Invalid directory URL {0}")]
    InvalidUrl(String),

    /// Employee not found
    #[error("Employee not found: {id}")]
    EmployeeNotFound { id: String },
}
