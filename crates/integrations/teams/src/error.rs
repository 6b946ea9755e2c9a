use herald_core::Platform;
use herald_provider::SendError;
use thiserror::Error;

/// Errors specific to the Microsoft Teams sender.
///
/// These are internal errors that get converted into [`SendError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum TeamsError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("teams webhook returned status {0}")]
    Status(reqwest::StatusCode),

    /// The card could not be encoded.
    #[error("failed to serialize card: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<TeamsError> for SendError {
    fn from(err: TeamsError) -> Self {
        match err {
            TeamsError::Http(e) => SendError::Connection(e.without_url().to_string()),
            TeamsError::Status(status) => SendError::Delivery {
                platform: Platform::Teams,
                code: status.as_u16(),
                status: status.to_string(),
            },
            TeamsError::Serialization(e) => SendError::Serialization(e.to_string()),
        }
    }
}
