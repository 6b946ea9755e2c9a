use herald_core::{DetectionMode, Platform, WebhookMessage, resolve_platform};
use herald_discord::DiscordSender;
use herald_mattermost::MattermostSender;
use herald_provider::{DynSender, SendError, require_url};
use herald_rocketchat::RocketChatSender;
use herald_slack::SlackSender;
use herald_teams::TeamsSender;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::RouterConfig;

/// Dispatches messages to the sender for their destination platform.
///
/// Holds no per-call state; one router may serve concurrent callers.
pub struct Router {
    default_platform: Option<String>,
    detection: DetectionMode,
    slack: SlackSender,
    discord: DiscordSender,
    mattermost: MattermostSender,
    rocketchat: RocketChatSender,
    teams: TeamsSender,
}

impl Router {
    /// Build a router and the HTTP client its senders share.
    pub fn new(config: RouterConfig) -> Result<Self, SendError> {
        let mut builder = Client::builder().user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SendError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(config, client))
    }

    /// Build a router whose senders share `client`.
    pub fn with_client(config: RouterConfig, client: Client) -> Self {
        Self {
            default_platform: config.default_platform,
            detection: config.detection,
            slack: SlackSender::with_client(client.clone()),
            discord: DiscordSender::with_client(config.discord, client.clone()),
            mattermost: MattermostSender::with_client(config.mattermost, client.clone()),
            rocketchat: RocketChatSender::with_client(config.rocketchat, client.clone()),
            teams: TeamsSender::with_client(client),
        }
    }

    /// Resolve the platform `webhook_url` would be delivered to.
    pub fn resolve(&self, webhook_url: &str) -> Result<Platform, SendError> {
        Ok(resolve_platform(
            self.default_platform.as_deref(),
            webhook_url,
            self.detection,
        )?)
    }

    /// Resolve the platform for `webhook_url` and deliver `message` there.
    #[instrument(skip_all)]
    pub async fn send_message(
        &self,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> Result<(), SendError> {
        let platform = self.resolve(webhook_url)?;
        self.send_to(platform, webhook_url, message).await
    }

    /// Deliver to the platform named by `platform` (case-insensitive),
    /// bypassing URL detection.
    pub async fn send_to_platform(
        &self,
        platform: &str,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> Result<(), SendError> {
        require_url(webhook_url)?;
        let platform = platform.parse::<Platform>()?;
        self.send_to(platform, webhook_url, message).await
    }

    /// Deliver to an already-resolved platform.
    pub async fn send_to(
        &self,
        platform: Platform,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> Result<(), SendError> {
        require_url(webhook_url)?;
        debug!(%platform, "dispatching message");
        self.sender(platform).send(webhook_url, message).await
    }

    /// The sender for `platform`.
    pub fn sender(&self, platform: Platform) -> &dyn DynSender {
        match platform {
            Platform::Slack => &self.slack,
            Platform::Discord => &self.discord,
            Platform::Mattermost => &self.mattermost,
            Platform::RocketChat => &self.rocketchat,
            Platform::Teams => &self.teams,
        }
    }

    /// Render the JSON body that would be posted for `platform`, without
    /// sending anything.
    pub fn render(
        &self,
        platform: Platform,
        message: &WebhookMessage,
    ) -> Result<serde_json::Value, SendError> {
        let rendered = match platform {
            Platform::Slack => serde_json::to_value(message),
            Platform::Discord => serde_json::to_value(self.discord.build_payload(message)),
            Platform::Mattermost => serde_json::to_value(self.mattermost.build_payload(message)),
            Platform::RocketChat => serde_json::to_value(self.rocketchat.build_payload(message)),
            Platform::Teams => serde_json::to_value(self.teams.build_payload(message)),
        };
        rendered.map_err(|e| SendError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use herald_core::{Attachment, Block};

    use super::*;

    fn router(config: RouterConfig) -> Router {
        Router::with_client(config, Client::new())
    }

    #[test]
    fn resolve_uses_override_then_url() {
        let auto = router(RouterConfig::default());
        assert_eq!(
            auto.resolve("https://discordapp.com/api/webhooks/1/x").unwrap(),
            Platform::Discord
        );

        let forced = router(RouterConfig::default().with_default_platform("RocketChat"));
        assert_eq!(
            forced.resolve("https://discordapp.com/api/webhooks/1/x").unwrap(),
            Platform::RocketChat
        );
    }

    #[test]
    fn resolve_reports_unsupported_override() {
        let forced = router(RouterConfig::default().with_default_platform("irc"));
        let err = forced.resolve("https://hooks.slack.com/x").unwrap_err();
        assert!(matches!(err, SendError::Configuration(ref msg) if msg.contains("irc")));
    }

    #[test]
    fn resolve_respects_detection_mode() {
        let path_aware = router(RouterConfig::default());
        assert_eq!(
            path_aware.resolve("https://chat.example.com/hooks/a/b").unwrap(),
            Platform::RocketChat
        );

        let host_only = router(RouterConfig::default().with_detection(DetectionMode::HostOnly));
        let err = host_only
            .resolve("https://chat.example.com/hooks/a/b")
            .unwrap_err();
        assert!(matches!(err, SendError::Detection(_)));
    }

    #[test]
    fn sender_lookup_matches_platform() {
        let router = router(RouterConfig::default());
        for platform in Platform::ALL {
            assert_eq!(router.sender(platform).platform(), platform);
        }
    }

    #[test]
    fn render_produces_platform_payloads() {
        let router = router(RouterConfig::default());
        let message = WebhookMessage::new().with_attachment(
            Attachment::new("Alert")
                .with_color("#FF0000")
                .with_block(Block::fields(["*Host*\nweb-1"])),
        );

        let teams = router.render(Platform::Teams, &message).unwrap();
        assert_eq!(teams["type"], "message");

        let discord = router.render(Platform::Discord, &message).unwrap();
        assert_eq!(discord["embeds"][0]["fields"][0]["name"], "Host");

        let mattermost = router.render(Platform::Mattermost, &message).unwrap();
        assert_eq!(mattermost["attachments"][0]["fallback"], "Alert");

        let rocketchat = router.render(Platform::RocketChat, &message).unwrap();
        assert_eq!(rocketchat["attachments"][0]["text"], "*Host*\nweb-1");

        let slack = router.render(Platform::Slack, &message).unwrap();
        assert_eq!(slack, serde_json::to_value(&message).unwrap());
    }
}
