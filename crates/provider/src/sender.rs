use async_trait::async_trait;
use herald_core::{Platform, WebhookMessage};

use crate::error::SendError;

/// Strongly-typed sender trait with native `async fn`.
///
/// A sender projects a [`WebhookMessage`] into one platform's webhook
/// payload and performs a single POST. Implementations hold no per-call
/// state, so one sender may serve concurrent callers.
///
/// This trait is **not** object-safe because it uses native `async fn` methods
/// (which desugar to opaque `impl Future` return types). If you need dynamic
/// dispatch, use [`DynSender`] instead -- every `Sender` automatically
/// implements `DynSender` via a blanket implementation.
pub trait Sender: Send + Sync {
    /// The platform this sender delivers to.
    fn platform(&self) -> Platform;

    /// Deliver `message` to `webhook_url`.
    ///
    /// Succeeds only when the endpoint answers with a `2xx` status.
    fn send(
        &self,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> impl std::future::Future<Output = Result<(), SendError>> + Send;
}

/// Object-safe sender trait for use behind `&dyn DynSender`.
///
/// You generally should not implement this trait directly -- instead implement
/// [`Sender`] and rely on the blanket implementation.
#[async_trait]
pub trait DynSender: Send + Sync {
    /// The platform this sender delivers to.
    fn platform(&self) -> Platform;

    /// Deliver `message` to `webhook_url`.
    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError>;
}

#[async_trait]
impl<T: Sender + Sync> DynSender for T {
    fn platform(&self) -> Platform {
        Sender::platform(self)
    }

    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError> {
        Sender::send(self, webhook_url, message).await
    }
}

/// Reject an empty webhook URL before any I/O happens.
pub fn require_url(webhook_url: &str) -> Result<(), SendError> {
    if webhook_url.is_empty() {
        return Err(herald_core::RoutingError::MissingUrl.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// A sender that counts deliveries instead of performing them.
    struct CountingSender {
        sent: AtomicUsize,
        should_fail: bool,
    }

    impl CountingSender {
        fn new(should_fail: bool) -> Self {
            Self {
                sent: AtomicUsize::new(0),
                should_fail,
            }
        }
    }

    impl Sender for CountingSender {
        fn platform(&self) -> Platform {
            Platform::Slack
        }

        async fn send(&self, webhook_url: &str, _message: &WebhookMessage) -> Result<(), SendError> {
            require_url(webhook_url)?;
            if self.should_fail {
                return Err(SendError::Connection("mock failure".into()));
            }
            self.sent.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn sender_send_success() {
        let sender = CountingSender::new(false);
        Sender::send(&sender, "http://hook", &WebhookMessage::new())
            .await
            .unwrap();
        assert_eq!(sender.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sender_send_failure() {
        let sender = CountingSender::new(true);
        let err = Sender::send(&sender, "http://hook", &WebhookMessage::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SendError::Connection(_)));
    }

    #[tokio::test]
    async fn blanket_dyn_sender_impl() {
        let sender = CountingSender::new(false);
        let dyn_sender: &dyn DynSender = &sender;
        assert_eq!(dyn_sender.platform(), Platform::Slack);
        dyn_sender
            .send("http://hook", &WebhookMessage::new())
            .await
            .unwrap();
        assert_eq!(sender.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_url_is_a_configuration_error() {
        let sender = CountingSender::new(false);
        let err = Sender::send(&sender, "", &WebhookMessage::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SendError::Configuration(_)));
        assert_eq!(sender.sent.load(Ordering::SeqCst), 0);
    }
}
