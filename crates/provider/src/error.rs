use herald_core::{Platform, RoutingError};
use thiserror::Error;

/// Errors that can occur while routing or delivering a message.
#[derive(Debug, Error)]
pub enum SendError {
    /// Missing webhook URL or an unrecognized platform override.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The platform could not be inferred from the webhook URL.
    #[error("detection failed: {0}")]
    Detection(String),

    /// The platform payload could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A network or transport-level error occurred.
    #[error("connection error: {0}")]
    Connection(String),

    /// The webhook endpoint answered with a status outside `2xx`.
    #[error("{platform} webhook returned status {status}")]
    Delivery {
        platform: Platform,
        /// Numeric HTTP status code.
        code: u16,
        /// Status line text, e.g. `500 Internal Server Error`.
        status: String,
    },
}

impl SendError {
    /// Returns `true` if the error is transient and a later attempt may
    /// succeed. Herald itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Delivery { code, .. } => *code == 429 || (500..600).contains(code),
            Self::Configuration(_) | Self::Detection(_) | Self::Serialization(_) => false,
        }
    }
}

impl From<RoutingError> for SendError {
    fn from(err: RoutingError) -> Self {
        match err {
            RoutingError::MissingUrl | RoutingError::UnsupportedPlatform(_) => {
                Self::Configuration(err.to_string())
            }
            RoutingError::Undetectable => Self::Detection(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_errors_map_to_configuration_or_detection() {
        let err: SendError = RoutingError::MissingUrl.into();
        assert!(matches!(err, SendError::Configuration(_)));
        assert_eq!(err.to_string(), "invalid configuration: no webhook URL provided");

        let err: SendError = RoutingError::UnsupportedPlatform("irc".into()).into();
        assert!(matches!(err, SendError::Configuration(ref msg) if msg.contains("irc")));

        let err: SendError = RoutingError::Undetectable.into();
        assert!(matches!(err, SendError::Detection(_)));
    }

    #[test]
    fn delivery_error_names_platform_and_status() {
        let err = SendError::Delivery {
            platform: Platform::Mattermost,
            code: 500,
            status: "500 Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "mattermost webhook returned status 500 Internal Server Error"
        );
    }

    #[test]
    fn retryable_errors() {
        assert!(SendError::Connection("reset".into()).is_retryable());
        for code in [429, 500, 503] {
            let err = SendError::Delivery {
                platform: Platform::Teams,
                code,
                status: code.to_string(),
            };
            assert!(err.is_retryable(), "{code}");
        }
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!SendError::Configuration("x".into()).is_retryable());
        assert!(!SendError::Detection("x".into()).is_retryable());
        assert!(!SendError::Serialization("x".into()).is_retryable());
        let err = SendError::Delivery {
            platform: Platform::Discord,
            code: 400,
            status: "400 Bad Request".into(),
        };
        assert!(!err.is_retryable());
    }
}
