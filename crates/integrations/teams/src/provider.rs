use herald_core::{Platform, WebhookMessage};
use herald_provider::{SendError, Sender, require_url};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::error::TeamsError;
use crate::types::TeamsPayload;

/// Microsoft Teams sender that posts Adaptive Cards to webhooks.
///
/// Implements the [`Sender`] trait so the router can dispatch to it.
pub struct TeamsSender {
    client: Client,
}

impl Default for TeamsSender {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamsSender {
    /// Create a new Teams sender.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Create a new Teams sender with a custom HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Build the webhook body for `message`.
    #[allow(clippy::unused_self)]
    pub fn build_payload(&self, message: &WebhookMessage) -> TeamsPayload {
        TeamsPayload::from_message(message)
    }
}

impl Sender for TeamsSender {
    fn platform(&self) -> Platform {
        Platform::Teams
    }

    #[instrument(
        skip(self, webhook_url, message),
        fields(platform = "teams", attachments = message.attachments.len())
    )]
    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError> {
        require_url(webhook_url)?;

        let body =
            serde_json::to_vec(&self.build_payload(message)).map_err(TeamsError::Serialization)?;

        debug!("posting Adaptive Card to Teams webhook");

        let response = herald_provider::inject_trace_context(
            self.client
                .post(webhook_url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .send()
        .await
        .map_err(TeamsError::Http)?;

        // Workflows answer 202 Accepted; legacy connectors answer 200 with "1".
        let status = response.status();
        drop(response);

        if !status.is_success() {
            return Err(TeamsError::Status(status).into());
        }

        debug!(%status, "Teams webhook accepted card");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use herald_core::{Attachment, Block, Platform, WebhookMessage};
    use herald_provider::testing::MockWebhookServer;
    use herald_provider::{SendError, Sender};

    use super::*;

    fn alert() -> WebhookMessage {
        WebhookMessage::new().with_attachment(
            Attachment::new("Alert")
                .with_color("#FF0000")
                .with_block(Block::text("host down"))
                .with_block(Block::fields(["*Host*\nweb-1"])),
        )
    }

    #[test]
    fn sender_platform() {
        assert_eq!(TeamsSender::new().platform(), Platform::Teams);
    }

    #[tokio::test]
    async fn send_posts_adaptive_card() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/workflows/abc/triggers/manual/paths/invoke?sig=x");
        let sender = TeamsSender::new();

        let server_handle = tokio::spawn(server.respond_once(202, ""));

        sender.send(&url, &alert()).await.expect("send should succeed");
        let request = server_handle.await.unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.header("content-type"), Some("application/json"));
        let json = request.json();
        assert_eq!(json["type"], "message");
        let body = &json["attachments"][0]["content"]["body"];
        assert_eq!(body[0]["text"], "Alert");
        assert_eq!(body[0]["color"], "Attention");
        assert_eq!(body[1]["text"], "host down");
        assert_eq!(body[2]["type"], "FactSet");
        assert_eq!(body[2]["facts"][0]["title"], "Host");
        assert_eq!(body[2]["facts"][0]["value"], "web-1");
    }

    #[tokio::test]
    async fn server_error_is_delivery_error() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/webhookb2/abc");
        let sender = TeamsSender::new();

        let server_handle = tokio::spawn(server.respond_once(500, "boom"));

        let err = sender.send(&url, &alert()).await.unwrap_err();
        server_handle.await.unwrap();

        assert!(matches!(
            err,
            SendError::Delivery {
                platform: Platform::Teams,
                code: 500,
                ..
            }
        ));
        assert!(err.to_string().contains("teams"));
        assert!(err.to_string().contains("500 Internal Server Error"));
    }
}
