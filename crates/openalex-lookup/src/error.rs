//! Error types for the OpenAlex lookup client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Callers branch on the variant to tell "service unreachable" apart from
//! "service reachable but said no" and "service answered with the wrong shape".

/// Errors from a lookup call.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    /// HTTP transport error (connection, DNS, TLS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        /// HTTP status code
        status: u16,
        /// Upstream error message, when the body carried one
        message: Option<String>,
    },

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Argument rejected before any request was issued.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// Argument that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

impl LookupError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput { field: field.into(), message: message.into() }
    }

    /// HTTP status code, if the server answered.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error message reported by the upstream service, if any.
    #[must_use]
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns true if the request never produced a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Extract a human-readable message from a non-2xx response body.
///
/// Prefers the JSON `"error"` field, then `"message"`, then the raw text.
#[must_use]
pub fn upstream_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed)
    {
        for key in ["error", "message"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                if !msg.is_empty() {
                    return Some(msg.clone());
                }
            }
        }
    }

    Some(trimmed.to_string())
}

/// Result type alias for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
