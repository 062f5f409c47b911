//! Error types for webhook delivery.
//!
//! These never escape a dispatcher's `send`; they exist so delivery failures
//! are logged with a precise reason.

/// Errors that can occur while posting to a webhook.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The request could not be sent or the response not received.
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status.
    #[error("webhook returned status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },
}

/// A specialized Result type for webhook delivery.
pub type Result<T> = std::result::Result<T, NotifyError>;
