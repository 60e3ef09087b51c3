//! Error types for calls to the REST collaborator.

use thiserror::Error;

/// Errors that can occur while talking to the collaborator.
///
/// Containers collapse every variant into a display string; the variants
/// exist so logs and direct client callers can tell failures apart.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Network, DNS or TLS failure
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Collaborator answered with a non-2xx status
    #[error("Request failed with status code {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Update-style call on a record that was never persisted
    #[error("Cannot {action} {resource} without an id")]
    MissingId {
        resource: &'static str,
        action: &'static str,
    },
}

impl ApiError {
    /// Short identifier for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Build(_) => "build_error",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::MissingId { .. } => "missing_id",
        }
    }

    /// HTTP status returned by the collaborator, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extracts a readable message from an error response body.
///
/// Problem-details bodies (`detail`, `title`) and `{"message": ..}` bodies
/// are unpacked; anything else is returned trimmed.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        for key in ["detail", "title", "message", "error"] {
            if let Some(serde_json::Value::String(message)) = fields.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }
    body.trim().to_string()
}
