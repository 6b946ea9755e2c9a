use std::path::Path;
use std::time::Duration;

use herald_core::DetectionMode;
use herald_discord::DiscordConfig;
use herald_mattermost::MattermostConfig;
use herald_rocketchat::RocketChatConfig;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the explicit platform override.
pub const DEFAULT_PLATFORM_ENV: &str = "WEBHOOK_DEFAULT_PLATFORM";

/// Router configuration, loadable from a TOML file.
///
/// # Example
///
/// ```toml
/// default_platform = "teams"
/// detection = "host-only"
/// timeout_seconds = 10
///
/// [discord]
/// username = "Herald"
///
/// [mattermost]
/// username = "Herald"
/// icon_url = "https://example.com/herald.png"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Explicit platform override. Empty means auto-detect from the URL.
    ///
    /// Kept as the raw configured value so an unsupported name surfaces as
    /// an error on send, naming the offending value.
    pub default_platform: Option<String>,

    /// Which URL heuristics auto-detection applies.
    pub detection: DetectionMode,

    /// Transport timeout per request, in seconds. `0` disables it.
    pub timeout_seconds: u64,

    pub discord: DiscordConfig,
    pub mattermost: MattermostConfig,
    pub rocketchat: RocketChatConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_platform: None,
            detection: DetectionMode::default(),
            timeout_seconds: 30,
            discord: DiscordConfig::default(),
            mattermost: MattermostConfig::default(),
            rocketchat: RocketChatConfig::default(),
        }
    }
}

impl RouterConfig {
    /// Defaults plus the `WEBHOOK_DEFAULT_PLATFORM` override, if set.
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Replace the platform override with `WEBHOOK_DEFAULT_PLATFORM` when
    /// that variable is set to a non-empty value.
    #[must_use]
    pub fn with_env_override(self) -> Self {
        match std::env::var(DEFAULT_PLATFORM_ENV) {
            Ok(value) if !value.is_empty() => self.with_default_platform(value),
            _ => self,
        }
    }

    /// Set the explicit platform override.
    #[must_use]
    pub fn with_default_platform(mut self, platform: impl Into<String>) -> Self {
        self.default_platform = Some(platform.into());
        self
    }

    /// Set the detection mode.
    #[must_use]
    pub fn with_detection(mut self, detection: DetectionMode) -> Self {
        self.detection = detection;
        self
    }

    /// Set the transport timeout. A zero duration disables it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs();
        self
    }

    /// The transport timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}
