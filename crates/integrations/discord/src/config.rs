use serde::Deserialize;

/// Configuration for the Discord sender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Whether to append `?wait=true` to the webhook URL, causing Discord to
    /// return the created message object instead of 204 No Content.
    pub wait: bool,

    /// Username to display instead of the webhook's configured name.
    #[serde(alias = "username")]
    pub default_username: Option<String>,

    /// Avatar URL to display instead of the webhook's configured avatar.
    #[serde(alias = "avatar_url")]
    pub default_avatar_url: Option<String>,
}

impl DiscordConfig {
    /// Create a configuration that keeps the webhook's own identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable `?wait=true` on webhook requests.
    #[must_use]
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    /// Set the default username for messages.
    #[must_use]
    pub fn with_default_username(mut self, username: impl Into<String>) -> Self {
        self.default_username = Some(username.into());
        self
    }

    /// Set the default avatar URL for messages.
    #[must_use]
    pub fn with_default_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.default_avatar_url = Some(url.into());
        self
    }
}
