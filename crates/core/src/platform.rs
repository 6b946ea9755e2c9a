use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// A chat platform Herald can deliver to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Slack,
    Discord,
    Mattermost,
    #[serde(rename = "rocketchat")]
    RocketChat,
    Teams,
}

impl Platform {
    /// Every supported platform, in the order they are listed to users.
    pub const ALL: [Platform; 5] = [
        Platform::Slack,
        Platform::Discord,
        Platform::Mattermost,
        Platform::RocketChat,
        Platform::Teams,
    ];

    /// The lowercase identifier accepted in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::Discord => "discord",
            Self::Mattermost => "mattermost",
            Self::RocketChat => "rocketchat",
            Self::Teams => "teams",
        }
    }

    /// Comma-separated list of supported identifiers, for error messages.
    pub fn supported_list() -> String {
        Self::ALL.map(Platform::as_str).join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = RoutingError;

    /// Parses a platform identifier, ignoring ASCII case only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| RoutingError::UnsupportedPlatform(normalized))
    }
}
