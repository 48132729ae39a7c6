//! Error types for the contact pipeline.
//!
//! These never reach the form caller directly. The coordinator folds every
//! failure into a [`PipelineStatus`](crate::PipelineStatus); the typed errors
//! exist so the delivery client and the config layer can log what went wrong.

/// Contact pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// One or more required configuration values are missing.
    #[error("missing required configuration: {}", missing.join(", "))]
    Config { missing: Vec<String> },

    /// A configuration value is present but unusable.
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// Transport-level failure talking to the delivery endpoint.
    #[error("network error: {message}")]
    Network { message: String },

    /// The endpoint answered with a non-success status code.
    #[error("delivery endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The endpoint answered 2xx but did not declare success.
    #[error("delivery rejected: {message}")]
    Rejected { message: String },

    /// The acknowledgement body could not be parsed.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ContactError {
    /// Whether the error is a configuration fault rather than a delivery fault.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::InvalidConfig { .. })
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for contact pipeline operations.
pub type ContactResult<T> = Result<T, ContactError>;
