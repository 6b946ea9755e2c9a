use serde::Deserialize;

/// Configuration for the Mattermost sender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MattermostConfig {
    /// Display name override for posted messages.
    pub username: Option<String>,

    /// Avatar URL override for posted messages.
    pub icon_url: Option<String>,
}

impl MattermostConfig {
    /// Create a configuration that keeps the webhook's own name and icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the avatar URL override.
    #[must_use]
    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }
}
