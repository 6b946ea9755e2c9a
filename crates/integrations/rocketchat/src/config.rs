use serde::Deserialize;

/// Configuration for the RocketChat sender.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RocketChatConfig {
    /// Display name shown instead of the integration's user.
    pub alias: Option<String>,

    /// Avatar image URL.
    pub avatar: Option<String>,
}

impl RocketChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_partial_table() {
        let config: RocketChatConfig = serde_json::from_str(r#"{"alias":"Herald"}"#).unwrap();
        assert_eq!(config.alias.as_deref(), Some("Herald"));
        assert!(config.avatar.is_none());
    }
}
